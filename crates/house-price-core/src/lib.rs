//! House Price Core
//!
//! Schema and validation for house records submitted to the price
//! prediction service.
//!
//! ## Architecture
//!
//! 1. **Record** (`record`): the typed `HouseRecord` and `PredictionResult`
//!    value objects exchanged with the prediction service.
//!
//! 2. **Validation** (`validation`): a declarative field table checked
//!    against untyped JSON input. Either every field validates and a
//!    `HouseRecord` is produced, or a `ValidationError` lists every
//!    violated field.
//!
//! 3. **Presets** (`presets`): named, ready-made records.
//!
//! 4. **Format** (`format`): rupee formatting for predicted prices.
//!
//! ## Example
//!
//! ```rust
//! use house_price_core::validate_house_record;
//!
//! let input = serde_json::json!({
//!     "area": "1200", "bedrooms": 2, "bathrooms": 1, "stories": 1,
//!     "mainroad": "yes", "guestroom": "no", "basement": "no",
//!     "hotwaterheating": "no", "airconditioning": "yes", "parking": 1,
//!     "prefarea": "no", "furnishingstatus": "semi-furnished"
//! });
//!
//! let record = validate_house_record(&input).unwrap();
//! assert_eq!(record.area, 1200.0);
//! ```

pub mod error;
pub mod format;
pub mod presets;
pub mod record;
pub mod validation;

pub use error::{FieldViolation, ValidationError, ViolationKind};
pub use format::format_inr;
pub use presets::{find_preset, presets, Preset};
pub use record::{FurnishingStatus, HouseRecord, PredictionResult, YesNo};
pub use validation::{validate_house_record, FieldKind, FieldSpec, NumericBounds, HOUSE_SCHEMA};
