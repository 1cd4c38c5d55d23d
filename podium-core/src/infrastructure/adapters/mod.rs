pub mod datafusion;
pub mod local_store;

pub use datafusion::DataFusionSource;
pub use local_store::LocalStore;
