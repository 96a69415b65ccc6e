pub mod error;
pub mod fees;
pub mod forex;
pub mod loan_risk;
pub mod segmentation;

use serde::{Deserialize, Deserializer};

/// Reads an explicit JSON `null` as the type's default. Pair with
/// `#[serde(default)]` so a missing key behaves the same way.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
