pub mod error;
pub mod lang;
pub mod model;
pub mod result;
pub mod rules;
pub mod script;

pub use crate::error::ModelError;
pub use crate::lang::{IsoCode639_1, IsoCode639_3, Language};
pub use crate::model::{ModelStore, NgramModel, OrderNgram};
pub use crate::result::{ConfidenceValue, DetectionResult};
pub use crate::rules::{MostCommonNgramsTable, UniqueNgramsTable};
pub use crate::script::{script_of, Script};
