use serde::{de::DeserializeOwned, Serialize};

use crate::errors::{ErrorInfo, ScanError};

fn serde_error(code: &str, err: impl ToString) -> ScanError {
    ScanError::Serde(ErrorInfo::new(code, err.to_string()))
}

/// Serializes a value into YAML.
pub fn to_yaml_string<T: Serialize>(value: &T) -> Result<String, ScanError> {
    serde_yaml::to_string(value).map_err(|err| serde_error("yaml_serialize", err))
}

/// Deserializes a YAML payload into the requested type.
pub fn from_yaml_slice<T: DeserializeOwned>(data: &[u8]) -> Result<T, ScanError> {
    serde_yaml::from_slice(data).map_err(|err| serde_error("yaml_deserialize", err))
}

/// Deserializes a value from JSON bytes.
pub fn from_json_slice<T: DeserializeOwned>(data: &[u8]) -> Result<T, ScanError> {
    serde_json::from_slice(data).map_err(|err| serde_error("json_deserialize", err))
}
