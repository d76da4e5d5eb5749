use std::collections::HashMap;
use std::sync::Arc;
use std::sync::RwLock;


/// Visual state of a feature indicator.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum IndicatorState {
    On,
    Off,
}

impl IndicatorState {
    /// Derive the indicator state from a configuration flag.
    ///
    /// A flag is enabled only when its value is the literal string `true`.
    /// Any other value, including a missing one, disables the indicator.
    pub fn from_flag(value: Option<&str>) -> IndicatorState {
        match value {
            Some("true") => IndicatorState::On,
            _ => IndicatorState::Off,
        }
    }

    /// CSS class used by the console markup for this state.
    pub fn css_class(self) -> &'static str {
        match self {
            IndicatorState::On => "onIcon",
            IndicatorState::Off => "offIcon",
        }
    }
}


/// A display handle able to show text or toggle an indicator.
pub trait DisplaySurface: Send + Sync {
    /// Replace the text content of the surface.
    fn set_text(&self, text: &str);

    /// Toggle the indicator state of the surface.
    fn set_indicator(&self, state: IndicatorState);
}


/// Lookup of display surfaces on the hosting page by element id.
pub trait PageElements {
    /// Returns the surface labeled with the given id, if the page has one.
    fn element(&self, id: &str) -> Option<Arc<dyn DisplaySurface>>;
}


/// Semantic names of the fields shown on the admin overview panel.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum Field {
    SitesPerHost,
    KSafety,
    PartitionDetection,
    HttpAccess,
    JsonApi,
    AutoSnapshot,
    CommandLog,
    /// Recognised and resolvable but not written by any operation.
    CommandLogFrequencyTime,
    /// Recognised and resolvable but not written by any operation.
    CommandLogFrequencyTransactions,
    HeartbeatTimeout,
    TempTablesMaxSize,
    SnapshotPriority,
    ClientPort,
    AdminPort,
    HttpPort,
    InternalPort,
    ZookeeperPort,
    ReplicationPort,
    Root,
    Snapshots,
    CommandLogs,
    CommandLogSnapshots,
}

impl Field {
    /// All recognised fields, in display order.
    pub const ALL: &'static [Field] = &[
        Field::SitesPerHost,
        Field::KSafety,
        Field::PartitionDetection,
        Field::HttpAccess,
        Field::JsonApi,
        Field::AutoSnapshot,
        Field::CommandLog,
        Field::CommandLogFrequencyTime,
        Field::CommandLogFrequencyTransactions,
        Field::HeartbeatTimeout,
        Field::TempTablesMaxSize,
        Field::SnapshotPriority,
        Field::ClientPort,
        Field::AdminPort,
        Field::HttpPort,
        Field::InternalPort,
        Field::ZookeeperPort,
        Field::ReplicationPort,
        Field::Root,
        Field::Snapshots,
        Field::CommandLogs,
        Field::CommandLogSnapshots,
    ];

    /// Semantic key of the field, used for overrides and log records.
    pub fn name(self) -> &'static str {
        match self {
            Field::SitesPerHost => "sites_per_host",
            Field::KSafety => "k_safety",
            Field::PartitionDetection => "partition_detection",
            Field::HttpAccess => "http_access",
            Field::JsonApi => "json_api",
            Field::AutoSnapshot => "auto_snapshot",
            Field::CommandLog => "command_log",
            Field::CommandLogFrequencyTime => "command_log_frequency_time",
            Field::CommandLogFrequencyTransactions => "command_log_frequency_transactions",
            Field::HeartbeatTimeout => "heartbeat_timeout",
            Field::TempTablesMaxSize => "temp_tables_max_size",
            Field::SnapshotPriority => "snapshot_priority",
            Field::ClientPort => "client_port",
            Field::AdminPort => "admin_port",
            Field::HttpPort => "http_port",
            Field::InternalPort => "internal_port",
            Field::ZookeeperPort => "zookeeper_port",
            Field::ReplicationPort => "replication_port",
            Field::Root => "root",
            Field::Snapshots => "snapshots",
            Field::CommandLogs => "command_logs",
            Field::CommandLogSnapshots => "command_log_snapshots",
        }
    }

    /// Default element id of the field on the hosting page.
    pub fn default_element_id(self) -> &'static str {
        match self {
            Field::SitesPerHost => "sitePerHost",
            Field::KSafety => "kSafety",
            Field::PartitionDetection => "partitionDetectionIcon",
            Field::HttpAccess => "httpAccessIcon",
            Field::JsonApi => "jsonAPIIcon",
            Field::AutoSnapshot => "autoSnapshotIcon",
            Field::CommandLog => "commandLogIcon",
            Field::CommandLogFrequencyTime => "commandlogfreqtime",
            Field::CommandLogFrequencyTransactions => "commandlogfreqtxns",
            Field::HeartbeatTimeout => "hrtTimeOutSpan",
            Field::TempTablesMaxSize => "temptablesmaxsize",
            Field::SnapshotPriority => "snapshotpriority",
            Field::ClientPort => "clientport",
            Field::AdminPort => "adminport",
            Field::HttpPort => "httpport",
            Field::InternalPort => "internalPort",
            Field::ZookeeperPort => "zookeeperPort",
            Field::ReplicationPort => "replicationPort",
            Field::Root => "voltdbroot",
            Field::Snapshots => "snapshotpath",
            Field::CommandLogs => "commandlogpath",
            Field::CommandLogSnapshots => "commandlogsnapshotpath",
        }
    }
}


/// Mapping from semantic field to the display surface it writes to.
///
/// The map is resolved once, before a binder is constructed, and stays
/// fixed afterwards.
/// Fields without a surface are skipped by the binder.
#[derive(Clone, Default)]
pub struct SurfaceMap {
    surfaces: HashMap<Field, Arc<dyn DisplaySurface>>,
}

impl SurfaceMap {
    pub fn new() -> SurfaceMap {
        SurfaceMap {
            surfaces: HashMap::new(),
        }
    }

    /// Bind a field directly to a surface.
    pub fn bind(&mut self, field: Field, surface: Arc<dyn DisplaySurface>) {
        self.surfaces.insert(field, surface);
    }

    /// Returns the surface bound to the field, if any.
    pub fn get(&self, field: Field) -> Option<&Arc<dyn DisplaySurface>> {
        self.surfaces.get(&field)
    }
}


/// In-memory labeled element of a hosting page.
///
/// Tracks the text content and icon class written to one element so
/// server-side renderers and tests can observe binder writes.
#[derive(Debug, Default)]
pub struct Element {
    css_class: RwLock<String>,
    text: RwLock<String>,
}

impl Element {
    pub fn new() -> Arc<Element> {
        Arc::new(Element::default())
    }

    /// Current icon class of the element.
    pub fn css_class(&self) -> String {
        self.css_class
            .read()
            .expect("Element css_class lock poisoned")
            .clone()
    }

    /// Current text content of the element.
    pub fn text(&self) -> String {
        self.text.read().expect("Element text lock poisoned").clone()
    }
}

impl DisplaySurface for Element {
    fn set_text(&self, text: &str) {
        let mut content = self.text.write().expect("Element text lock poisoned");
        *content = String::from(text);
    }

    fn set_indicator(&self, state: IndicatorState) {
        let mut class = self
            .css_class
            .write()
            .expect("Element css_class lock poisoned");
        *class = String::from(state.css_class());
    }
}


/// Fixed registry of labeled elements acting as a hosting page.
#[derive(Debug, Default)]
pub struct StaticPage {
    elements: HashMap<String, Arc<Element>>,
}

impl StaticPage {
    pub fn new() -> StaticPage {
        StaticPage {
            elements: HashMap::new(),
        }
    }

    /// Register an element under the given id and return a handle to it.
    pub fn label<S>(&mut self, id: S) -> Arc<Element>
    where
        S: Into<String>,
    {
        let element = Element::new();
        self.elements.insert(id.into(), Arc::clone(&element));
        element
    }

    /// Returns the typed handle of the element labeled with the given id.
    pub fn get(&self, id: &str) -> Option<&Arc<Element>> {
        self.elements.get(id)
    }
}

impl PageElements for StaticPage {
    fn element(&self, id: &str) -> Option<Arc<dyn DisplaySurface>> {
        self.elements
            .get(id)
            .map(|element| Arc::clone(element) as Arc<dyn DisplaySurface>)
    }
}
