use slog::Logger;

use voltconsole_models::AdminConfiguration;
use voltconsole_models::ClientPort;

use super::super::interfaces::DisplaySurface;
use super::super::interfaces::Field;
use super::super::interfaces::IndicatorState;
use super::super::interfaces::PageElements;
use super::super::interfaces::SurfaceMap;

mod config;

pub use self::config::Config;


/// Resolve display surfaces for all recognised fields against the hosting page.
///
/// Element id overrides from the overview configuration take precedence
/// over the built-in ids.
/// Ids that match no labeled element leave the field unbound.
pub fn resolve_surfaces(page: &dyn PageElements, overrides: &Config) -> SurfaceMap {
    let mut surfaces = SurfaceMap::new();
    for &field in Field::ALL {
        let id = overrides
            .element_id(field)
            .unwrap_or_else(|| field.default_element_id());
        if let Some(surface) = page.element(id) {
            surfaces.bind(field, surface);
        }
    }
    surfaces
}


/// Component to display cluster configuration on the admin overview panel.
///
/// The binder copies fields of an externally fetched [`AdminConfiguration`]
/// onto the surfaces it was constructed with.
/// It keeps no state between calls and never fails: fields without a bound
/// surface are skipped and absent payload fields render as empty text.
/// Payload validation is the responsibility of the fetching side.
///
/// [`AdminConfiguration`]: voltconsole_models/struct.AdminConfiguration.html
pub struct AdminOverview {
    logger: Logger,
    surfaces: SurfaceMap,
}

impl AdminOverview {
    /// Create a binder over an already resolved surface map.
    pub fn new(surfaces: SurfaceMap, logger: Logger) -> AdminOverview {
        AdminOverview { logger, surfaces }
    }

    /// Resolve surfaces against the hosting page and create a binder.
    pub fn attach(page: &dyn PageElements, overrides: &Config, logger: Logger) -> AdminOverview {
        let surfaces = resolve_surfaces(page, overrides);
        AdminOverview::new(surfaces, logger)
    }

    /// Write an admin configuration payload to the bound surfaces.
    pub fn display_admin_configuration(&self, config: &AdminConfiguration) {
        self.configure_cluster_values(config);
        self.configure_port_values(config);
        self.configure_directory_values(config);
    }

    /// Write the client port, which is reported separately from the rest
    /// of the admin configuration.
    pub fn display_client_port(&self, payload: &ClientPort) {
        self.write_text(Field::ClientPort, &payload.client_port);
    }

    fn configure_cluster_values(&self, config: &AdminConfiguration) {
        self.write_text(Field::SitesPerHost, &config.sites_per_host);
        self.write_text(Field::KSafety, &config.k_safety);
        self.write_indicator(Field::PartitionDetection, &config.partition_detection);
        self.write_indicator(Field::HttpAccess, &config.http_enabled);
        self.write_indicator(Field::JsonApi, &config.json_enabled);
        self.write_indicator(Field::AutoSnapshot, &config.snapshot_enabled);
        self.write_indicator(Field::CommandLog, &config.command_log_enabled);
        // Command log frequency surfaces resolve but nothing feeds them.
        self.write_text(Field::HeartbeatTimeout, &config.heartbeat_timeout);
        self.write_text(Field::TempTablesMaxSize, &config.temp_tables_max_size);
        self.write_text(Field::SnapshotPriority, &config.snapshot_priority);
    }

    fn configure_port_values(&self, config: &AdminConfiguration) {
        self.write_text(Field::AdminPort, &config.admin_port);
        self.write_text(Field::HttpPort, &config.http_port);
        self.write_text(Field::InternalPort, &config.internal_port);
        self.write_text(Field::ZookeeperPort, &config.zookeeper_port);
        self.write_text(Field::ReplicationPort, &config.replication_port);
    }

    fn configure_directory_values(&self, config: &AdminConfiguration) {
        self.write_text(Field::Root, &config.root_path);
        self.write_text(Field::Snapshots, &config.snapshot_path);
        self.write_text(Field::CommandLogs, &config.command_log_path);
        self.write_text(Field::CommandLogSnapshots, &config.command_log_snapshot_path);
    }

    fn write_text(&self, field: Field, value: &Option<String>) {
        match self.surfaces.get(field) {
            Some(surface) => {
                let text = value.as_ref().map(String::as_str).unwrap_or("");
                surface.set_text(text);
            }
            None => debug!(
                self.logger, "No display surface bound for field";
                "field" => field.name()
            ),
        }
    }

    fn write_indicator(&self, field: Field, value: &Option<String>) {
        let state = IndicatorState::from_flag(value.as_ref().map(String::as_str));
        match self.surfaces.get(field) {
            Some(surface) => surface.set_indicator(state),
            None => debug!(
                self.logger, "No display surface bound for field";
                "field" => field.name()
            ),
        }
    }
}


#[cfg(test)]
mod tests {
    use slog::Discard;
    use slog::Logger;

    use voltconsole_models::AdminConfiguration;

    use super::super::super::interfaces::Field;
    use super::super::super::interfaces::StaticPage;
    use super::AdminOverview;
    use super::Config;

    const EXAMPLE_PAYLOAD: &str = concat!(
        r#"{"sitesperhost":"4","kSafety":"1","partitionDetection":"true","#,
        r#""httpEnabled":"false","heartBeatTimeout":"90","tempTablesMaxSize":"100","#,
        r#""snapshotPriority":"5","adminPort":"21211","httpPort":"8080","#,
        r#""internalPort":"3021","zookeeperPort":"2181","replicationPort":"5555","#,
        r#""voltdbRoot":"/var/voltdb","snapshotPath":"/var/voltdb/snapshots","#,
        r#""commandLogPath":"/var/voltdb/cl","commandLogSnapshotPath":"/var/voltdb/clsnap"}"#
    );

    fn logger() -> Logger {
        Logger::root(Discard, o!())
    }

    /// A page carrying the stock console markup, one element per field.
    fn full_page() -> StaticPage {
        let mut page = StaticPage::new();
        for &field in Field::ALL {
            page.label(field.default_element_id());
        }
        page
    }

    fn text_of(page: &StaticPage, id: &str) -> String {
        page.get(id).expect("element not labeled on test page").text()
    }

    fn class_of(page: &StaticPage, id: &str) -> String {
        page.get(id)
            .expect("element not labeled on test page")
            .css_class()
    }

    fn example_config() -> AdminConfiguration {
        serde_json::from_str(EXAMPLE_PAYLOAD).unwrap()
    }

    mod display {
        use voltconsole_models::AdminConfiguration;

        use super::class_of;
        use super::example_config;
        use super::full_page;
        use super::logger;
        use super::text_of;
        use super::AdminOverview;
        use super::Config;

        #[test]
        fn writes_example_payload() {
            let page = full_page();
            let binder = AdminOverview::attach(&page, &Config::default(), logger());
            binder.display_admin_configuration(&example_config());
            assert_eq!(text_of(&page, "sitePerHost"), "4");
            assert_eq!(text_of(&page, "kSafety"), "1");
            assert_eq!(class_of(&page, "partitionDetectionIcon"), "onIcon");
            assert_eq!(class_of(&page, "httpAccessIcon"), "offIcon");
            assert_eq!(text_of(&page, "hrtTimeOutSpan"), "90");
            assert_eq!(text_of(&page, "temptablesmaxsize"), "100");
            assert_eq!(text_of(&page, "snapshotpriority"), "5");
            assert_eq!(text_of(&page, "adminport"), "21211");
            assert_eq!(text_of(&page, "httpport"), "8080");
            assert_eq!(text_of(&page, "internalPort"), "3021");
            assert_eq!(text_of(&page, "zookeeperPort"), "2181");
            assert_eq!(text_of(&page, "replicationPort"), "5555");
            assert_eq!(text_of(&page, "voltdbroot"), "/var/voltdb");
            assert_eq!(text_of(&page, "snapshotpath"), "/var/voltdb/snapshots");
            assert_eq!(text_of(&page, "commandlogpath"), "/var/voltdb/cl");
            assert_eq!(text_of(&page, "commandlogsnapshotpath"), "/var/voltdb/clsnap");
        }

        #[test]
        fn flags_require_the_literal_true() {
            let page = full_page();
            let binder = AdminOverview::attach(&page, &Config::default(), logger());
            let config = AdminConfiguration {
                partition_detection: Some("true".into()),
                http_enabled: Some("True".into()),
                json_enabled: Some("1".into()),
                snapshot_enabled: Some("yes".into()),
                ..AdminConfiguration::default()
            };
            binder.display_admin_configuration(&config);
            assert_eq!(class_of(&page, "partitionDetectionIcon"), "onIcon");
            assert_eq!(class_of(&page, "httpAccessIcon"), "offIcon");
            assert_eq!(class_of(&page, "jsonAPIIcon"), "offIcon");
            assert_eq!(class_of(&page, "autoSnapshotIcon"), "offIcon");
            assert_eq!(class_of(&page, "commandLogIcon"), "offIcon");
        }

        #[test]
        fn each_flag_drives_its_own_indicator() {
            let page = full_page();
            let binder = AdminOverview::attach(&page, &Config::default(), logger());
            let config = AdminConfiguration {
                json_enabled: Some("false".into()),
                snapshot_enabled: Some("true".into()),
                ..AdminConfiguration::default()
            };
            binder.display_admin_configuration(&config);
            assert_eq!(class_of(&page, "jsonAPIIcon"), "offIcon");
            assert_eq!(class_of(&page, "autoSnapshotIcon"), "onIcon");

            let config = AdminConfiguration {
                json_enabled: Some("true".into()),
                snapshot_enabled: Some("false".into()),
                ..AdminConfiguration::default()
            };
            binder.display_admin_configuration(&config);
            assert_eq!(class_of(&page, "jsonAPIIcon"), "onIcon");
            assert_eq!(class_of(&page, "autoSnapshotIcon"), "offIcon");
        }

        #[test]
        fn absent_fields_render_empty_text() {
            let page = full_page();
            let binder = AdminOverview::attach(&page, &Config::default(), logger());
            binder.display_admin_configuration(&AdminConfiguration::default());
            assert_eq!(text_of(&page, "sitePerHost"), "");
            assert_eq!(text_of(&page, "voltdbroot"), "");
            assert_eq!(class_of(&page, "commandLogIcon"), "offIcon");
        }

        #[test]
        fn frequency_surfaces_are_never_written() {
            let page = full_page();
            let binder = AdminOverview::attach(&page, &Config::default(), logger());
            let config = AdminConfiguration {
                command_log_frequency_time: Some("200".into()),
                command_log_frequency_transactions: Some("10000".into()),
                ..example_config()
            };
            binder.display_admin_configuration(&config);
            assert_eq!(text_of(&page, "commandlogfreqtime"), "");
            assert_eq!(text_of(&page, "commandlogfreqtxns"), "");
        }
    }

    mod client_port {
        use voltconsole_models::ClientPort;

        use super::example_config;
        use super::full_page;
        use super::logger;
        use super::text_of;
        use super::AdminOverview;
        use super::Config;

        #[test]
        fn writes_the_client_port() {
            let page = full_page();
            let binder = AdminOverview::attach(&page, &Config::default(), logger());
            binder.display_client_port(&ClientPort::new("21212"));
            assert_eq!(text_of(&page, "clientport"), "21212");
        }

        #[test]
        fn touches_no_other_surface() {
            let page = full_page();
            let binder = AdminOverview::attach(&page, &Config::default(), logger());
            binder.display_admin_configuration(&example_config());
            binder.display_client_port(&ClientPort::new("21212"));
            assert_eq!(text_of(&page, "clientport"), "21212");
            assert_eq!(text_of(&page, "adminport"), "21211");
            assert_eq!(text_of(&page, "sitePerHost"), "4");
        }
    }

    mod surfaces {
        use super::super::super::super::interfaces::Element;
        use super::super::super::super::interfaces::Field;
        use super::super::super::super::interfaces::StaticPage;
        use super::super::super::super::interfaces::SurfaceMap;
        use super::super::resolve_surfaces;
        use super::example_config;
        use super::full_page;
        use super::logger;
        use super::AdminOverview;
        use super::Config;

        #[test]
        fn unbound_fields_are_skipped() {
            let ports = Element::new();
            let mut surfaces = SurfaceMap::new();
            surfaces.bind(Field::AdminPort, ports.clone());
            let binder = AdminOverview::new(surfaces, logger());
            binder.display_admin_configuration(&example_config());
            assert_eq!(ports.text(), "21211");
        }

        #[test]
        fn overrides_take_precedence() {
            let mut page = full_page();
            let custom = page.label("customSites");
            let overrides = Config {
                sites_per_host: Some("customSites".into()),
                ..Config::default()
            };
            let binder = AdminOverview::attach(&page, &overrides, logger());
            binder.display_admin_configuration(&example_config());
            assert_eq!(custom.text(), "4");
            assert_eq!(
                page.get("sitePerHost").map(|sites| sites.text()),
                Some(String::from(""))
            );
        }

        #[test]
        fn unresolved_ids_leave_fields_unbound() {
            let page = StaticPage::new();
            let surfaces = resolve_surfaces(&page, &Config::default());
            assert!(surfaces.get(Field::SitesPerHost).is_none());
            assert!(surfaces.get(Field::ClientPort).is_none());
        }

        #[test]
        fn frequency_fields_resolve_from_stock_markup() {
            let page = full_page();
            let surfaces = resolve_surfaces(&page, &Config::default());
            assert!(surfaces.get(Field::CommandLogFrequencyTime).is_some());
            assert!(surfaces.get(Field::CommandLogFrequencyTransactions).is_some());
        }
    }
}
