use super::super::super::interfaces::Field;

/// Admin overview display options.
///
/// Every recognised field can be re-pointed at a different element id on
/// the hosting page; unset fields fall back to the built-in ids of the
/// stock console markup.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Element id override for the sites per host count.
    #[serde(default)]
    pub sites_per_host: Option<String>,

    /// Element id override for the k-safety factor.
    #[serde(default)]
    pub k_safety: Option<String>,

    /// Element id override for the partition detection indicator.
    #[serde(default)]
    pub partition_detection: Option<String>,

    /// Element id override for the HTTP access indicator.
    #[serde(default)]
    pub http_access: Option<String>,

    /// Element id override for the JSON API indicator.
    #[serde(default)]
    pub json_api: Option<String>,

    /// Element id override for the automated snapshots indicator.
    #[serde(default)]
    pub auto_snapshot: Option<String>,

    /// Element id override for the command logging indicator.
    #[serde(default)]
    pub command_log: Option<String>,

    /// Element id override for the command log fsync interval.
    #[serde(default)]
    pub command_log_frequency_time: Option<String>,

    /// Element id override for the command log fsync transaction count.
    #[serde(default)]
    pub command_log_frequency_transactions: Option<String>,

    /// Element id override for the heartbeat timeout.
    #[serde(default)]
    pub heartbeat_timeout: Option<String>,

    /// Element id override for the temporary table size limit.
    #[serde(default)]
    pub temp_tables_max_size: Option<String>,

    /// Element id override for the snapshot priority.
    #[serde(default)]
    pub snapshot_priority: Option<String>,

    /// Element id override for the client port.
    #[serde(default)]
    pub client_port: Option<String>,

    /// Element id override for the admin port.
    #[serde(default)]
    pub admin_port: Option<String>,

    /// Element id override for the HTTP port.
    #[serde(default)]
    pub http_port: Option<String>,

    /// Element id override for the internal port.
    #[serde(default)]
    pub internal_port: Option<String>,

    /// Element id override for the coordination service port.
    #[serde(default)]
    pub zookeeper_port: Option<String>,

    /// Element id override for the replication port.
    #[serde(default)]
    pub replication_port: Option<String>,

    /// Element id override for the database root directory.
    #[serde(default)]
    pub root: Option<String>,

    /// Element id override for the snapshots directory.
    #[serde(default)]
    pub snapshots: Option<String>,

    /// Element id override for the command logs directory.
    #[serde(default)]
    pub command_logs: Option<String>,

    /// Element id override for the command log snapshots directory.
    #[serde(default)]
    pub command_log_snapshots: Option<String>,
}

impl Config {
    /// Returns the configured element id override for a field, if any.
    pub fn element_id(&self, field: Field) -> Option<&str> {
        let id = match field {
            Field::SitesPerHost => &self.sites_per_host,
            Field::KSafety => &self.k_safety,
            Field::PartitionDetection => &self.partition_detection,
            Field::HttpAccess => &self.http_access,
            Field::JsonApi => &self.json_api,
            Field::AutoSnapshot => &self.auto_snapshot,
            Field::CommandLog => &self.command_log,
            Field::CommandLogFrequencyTime => &self.command_log_frequency_time,
            Field::CommandLogFrequencyTransactions => &self.command_log_frequency_transactions,
            Field::HeartbeatTimeout => &self.heartbeat_timeout,
            Field::TempTablesMaxSize => &self.temp_tables_max_size,
            Field::SnapshotPriority => &self.snapshot_priority,
            Field::ClientPort => &self.client_port,
            Field::AdminPort => &self.admin_port,
            Field::HttpPort => &self.http_port,
            Field::InternalPort => &self.internal_port,
            Field::ZookeeperPort => &self.zookeeper_port,
            Field::ReplicationPort => &self.replication_port,
            Field::Root => &self.root,
            Field::Snapshots => &self.snapshots,
            Field::CommandLogs => &self.command_logs,
            Field::CommandLogSnapshots => &self.command_log_snapshots,
        };
        id.as_ref().map(String::as_str)
    }
}
