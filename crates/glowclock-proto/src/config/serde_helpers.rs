use serde::{Deserialize, Deserializer, de::Error as _};

pub(super) fn scale_factor_deserializer<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;

    if value <= 0.0 {
        return Err(D::Error::custom("Scale factor must be greater than 0.0"));
    }

    if value > 2.0 {
        return Err(D::Error::custom("Scale factor cannot be greater than 2.0"));
    }

    Ok(value)
}

pub(super) fn positive_dimension_deserializer<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f32::deserialize(deserializer)?;

    if !value.is_finite() || value <= 0.0 {
        return Err(D::Error::custom("Window dimensions must be positive"));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use serde::de::{
        IntoDeserializer,
        value::{Error as DeError, F64Deserializer},
    };

    use super::*;

    fn scale(value: f64) -> Result<f64, DeError> {
        let deserializer: F64Deserializer<DeError> = value.into_deserializer();
        scale_factor_deserializer(deserializer)
    }

    #[test]
    fn scale_factor_accepts_range() {
        assert_eq!(scale(1.0).expect("valid"), 1.0);
        assert_eq!(scale(2.0).expect("valid"), 2.0);
    }

    #[test]
    fn scale_factor_rejects_out_of_range() {
        assert!(scale(0.0).is_err());
        assert!(scale(2.5).is_err());
    }
}
