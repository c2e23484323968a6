//! wtw-core: normalization of running conditions into canonical keys,
//! plus the seams shared by the table and remote resolvers.

pub mod conditions;
pub mod error;
pub mod extract;
pub mod key;
pub mod normalize;
pub mod observation;
pub mod resolver;
pub mod time;
pub mod tokens;

pub use conditions::weather_category;
pub use error::{Result, WtwError};
pub use extract::{AnchorExtractor, Extractor};
pub use key::{CanonicalKey, QueryStyle};
pub use normalize::{bucket_temperature, bucket_wind, day_part};
pub use observation::{Conditions, Observation, RawWeather, Wind};
pub use resolver::{RecommendationSet, Resolver};
pub use time::Clock;
pub use tokens::{validate, CategoricalFields};
