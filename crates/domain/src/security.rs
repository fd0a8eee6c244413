use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `security` block of an IP geolocation lookup.
///
/// Flags are read by truthiness: absent, `null`, `false`, `0` and `""` are
/// `false`, any other value is `true`. A malformed flag never hides a
/// positive one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct IpSecurity {
    #[serde(default, deserialize_with = "truthy")]
    pub is_proxy: bool,
    #[serde(default, deserialize_with = "truthy")]
    pub is_datacenter: bool,
    #[serde(default, deserialize_with = "truthy")]
    pub is_vpn: bool,
}

impl IpSecurity {
    pub fn is_suspicious(&self) -> bool {
        self.is_proxy || self.is_datacenter || self.is_vpn
    }
}

fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => flag,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    })
}
