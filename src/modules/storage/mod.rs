mod upload_store;

pub use upload_store::UploadStore;
