/// Use cases module containing application business logic orchestration
mod explore_graph;

pub use explore_graph::ExploreGraphUseCase;
