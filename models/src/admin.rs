/// Admin configuration payload fetched from the cluster.
///
/// The payload is produced by the configuration API and consumed for
/// display only: every field is carried as the string the server sent,
/// without validation or parsing.
/// Fields missing from the payload deserialise to `None`.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct AdminConfiguration {
    /// Number of sites (execution partitions) per host.
    #[serde(rename = "sitesperhost")]
    pub sites_per_host: Option<String>,

    /// Replication factor for fault tolerance.
    #[serde(rename = "kSafety")]
    pub k_safety: Option<String>,

    /// Network partition detection flag.
    #[serde(rename = "partitionDetection")]
    pub partition_detection: Option<String>,

    /// HTTP access flag.
    #[serde(rename = "httpEnabled")]
    pub http_enabled: Option<String>,

    /// JSON API flag.
    #[serde(rename = "jsonEnabled")]
    pub json_enabled: Option<String>,

    /// Automated snapshots flag.
    #[serde(rename = "snapshotEnabled")]
    pub snapshot_enabled: Option<String>,

    /// Command logging flag.
    #[serde(rename = "commandLogEnabled")]
    pub command_log_enabled: Option<String>,

    /// Command log fsync interval.
    #[serde(rename = "commandLogFrequencyTime")]
    pub command_log_frequency_time: Option<String>,

    /// Command log fsync transaction count.
    #[serde(rename = "commandLogFrequencyTransactions")]
    pub command_log_frequency_transactions: Option<String>,

    /// Heartbeat timeout, in seconds.
    #[serde(rename = "heartBeatTimeout")]
    pub heartbeat_timeout: Option<String>,

    /// Temporary table size limit, in megabytes.
    #[serde(rename = "tempTablesMaxSize")]
    pub temp_tables_max_size: Option<String>,

    /// Scheduling priority for snapshot work.
    #[serde(rename = "snapshotPriority")]
    pub snapshot_priority: Option<String>,

    /// Port used for administrative traffic.
    #[serde(rename = "adminPort")]
    pub admin_port: Option<String>,

    /// Port used for HTTP access.
    #[serde(rename = "httpPort")]
    pub http_port: Option<String>,

    /// Port used for intra-cluster traffic.
    #[serde(rename = "internalPort")]
    pub internal_port: Option<String>,

    /// Port used by the cluster coordination service.
    #[serde(rename = "zookeeperPort")]
    pub zookeeper_port: Option<String>,

    /// Port used for replication traffic.
    #[serde(rename = "replicationPort")]
    pub replication_port: Option<String>,

    /// Root data directory of the database.
    #[serde(rename = "voltdbRoot")]
    pub root_path: Option<String>,

    /// Directory automated snapshots are written to.
    #[serde(rename = "snapshotPath")]
    pub snapshot_path: Option<String>,

    /// Directory command logs are written to.
    #[serde(rename = "commandLogPath")]
    pub command_log_path: Option<String>,

    /// Directory command log snapshots are written to.
    #[serde(rename = "commandLogSnapshotPath")]
    pub command_log_snapshot_path: Option<String>,
}


/// Client port payload.
///
/// The client port is reported over a separate channel from the rest of
/// the admin configuration and has its own model.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct ClientPort {
    /// Port used for client connections.
    #[serde(rename = "clientPort")]
    pub client_port: Option<String>,
}

impl ClientPort {
    pub fn new<S>(port: S) -> ClientPort
    where
        S: Into<String>,
    {
        ClientPort {
            client_port: Some(port.into()),
        }
    }
}
