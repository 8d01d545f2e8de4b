//! The structs
//!

/// Wrapper struct for holding the health checks of a node.
#[derive(Debug, Default)]
pub struct AllHealthChecks {
    pub health_checks: Vec<HealthCheck>,
}
/// The struct for deserializing a single entry of `/v1/health/node/<node>`.
///
/// ```json
/// {
///     "Node": "consul-server-1",
///     "CheckID": "service:redis",
///     "Name": "Service 'redis' check",
///     "Status": "passing",
///     "Notes": "",
///     "Output": "HTTP GET http://localhost:6379: 200 OK",
///     "ServiceID": "redis",
///     "ServiceName": "redis",
///     "ServiceTags": ["primary"],
///     "CreateIndex": 10,
///     "ModifyIndex": 12
/// }
/// ```
/// Missing fields get their default value, fields not in the struct are ignored.
/// Consul sends `null` for `ServiceTags` on node level checks, which becomes an empty vec.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct HealthCheck {
    #[serde(rename = "Node", deserialize_with = "null_as_default")]
    pub node: String,
    #[serde(rename = "CheckID", deserialize_with = "null_as_default")]
    pub check_id: String,
    #[serde(rename = "Name", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "Status", deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(rename = "Notes", deserialize_with = "null_as_default")]
    pub notes: String,
    #[serde(rename = "Output", deserialize_with = "null_as_default")]
    pub output: String,
    #[serde(rename = "ServiceID", deserialize_with = "null_as_default")]
    pub service_id: String,
    #[serde(rename = "ServiceName", deserialize_with = "null_as_default")]
    pub service_name: String,
    #[serde(rename = "ServiceTags", deserialize_with = "null_as_default")]
    pub service_tags: Vec<String>,
    // raft indexes, not interpreted
    #[serde(rename = "CreateIndex")]
    pub create_index: u64,
    #[serde(rename = "ModifyIndex")]
    pub modify_index: u64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de> + Default,
{
    let value: Option<T> = serde::Deserialize::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
