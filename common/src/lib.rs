//! Shared job board core: the job model, the query evaluator and the
//! job store that both front-ends (`board` and `server`) sit on.

pub mod error;
pub mod filter;
pub mod model;
pub mod preferences;
pub mod render;
pub mod salary;
pub mod seed;
pub mod storage;
pub mod store;

pub use error::{FilterError, StoreError};
pub use filter::{Feed, FilterSpec, LocationMatch, evaluate};
pub use model::{JobRecord, NewJob};
pub use preferences::Theme;
pub use salary::{SalaryRange, salary_floor};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::JobStore;
