//! Director use cases.

mod create;
mod delete;
mod get;

use std::sync::Arc;

pub use create::CreateDirector;
pub use delete::DeleteDirector;
pub use get::GetDirector;

use crate::repositories::DirectorRepository;

#[derive(Clone)]
pub struct DirectorUseCases {
    pub create: Arc<CreateDirector>,
    pub get: Arc<GetDirector>,
    pub delete: Arc<DeleteDirector>,
}

impl DirectorUseCases {
    pub fn new(directors: Arc<dyn DirectorRepository>) -> Self {
        Self {
            create: Arc::new(CreateDirector::new(directors.clone())),
            get: Arc::new(GetDirector::new(directors.clone())),
            delete: Arc::new(DeleteDirector::new(directors)),
        }
    }
}
