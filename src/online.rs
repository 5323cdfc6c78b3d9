//! Connectivity checking over the host platform's network capabilities.
//!
//! The client never consults these checks itself — callers decide whether
//! and when to gate a request on [`OnlineChecker::is_online`].

/// A network transport the platform can report for the active network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportType {
    /// Mobile data.
    Cellular,
    /// Wi-Fi.
    Wifi,
    /// Wired Ethernet.
    Ethernet,
    /// Bluetooth tethering.
    Bluetooth,
    /// VPN overlay.
    Vpn,
    /// USB tethering.
    Usb,
    /// Wi-Fi Aware peer-to-peer.
    WifiAware,
    /// Low-power wireless personal area network.
    Lowpan,
}

/// Transports that count as being online.
const APPLICABLE_TRANSPORT_TYPES: [TransportType; 3] = [
    TransportType::Cellular,
    TransportType::Wifi,
    TransportType::Ethernet,
];

/// Snapshot of the capabilities the platform reports for one network.
pub trait NetworkCapabilities {
    /// Whether the network runs over the given transport.
    fn has_transport(&self, transport: TransportType) -> bool;
}

/// Port onto the host platform's connectivity API.
///
/// Implemented by the host against whatever the platform provides; each
/// call is expected to perform a fresh query, not return a cached record.
pub trait ConnectivityManager {
    /// The capability record of the currently active network, or `None`
    /// when there is no active network or no record for it.
    fn active_network_capabilities(&self) -> Option<Box<dyn NetworkCapabilities>>;
}

/// Whether the device currently has access to the Internet.
pub trait OnlineChecker {
    /// `true` when it is possible to perform external API calls.
    fn is_online(&self) -> bool;
}

/// [`OnlineChecker`] backed by a platform [`ConnectivityManager`].
///
/// Online means the active network reports at least one of mobile data,
/// Wi-Fi, or Ethernet. Transports outside that set (Bluetooth, VPN, USB,
/// ...) are never queried. No caching — every call is a fresh platform
/// query.
pub struct PlatformOnlineChecker<C> {
    connectivity_manager: C,
}

impl<C: ConnectivityManager> PlatformOnlineChecker<C> {
    /// Creates a checker over the given platform connectivity source.
    pub fn new(connectivity_manager: C) -> Self {
        Self {
            connectivity_manager,
        }
    }
}

impl<C: ConnectivityManager> OnlineChecker for PlatformOnlineChecker<C> {
    fn is_online(&self) -> bool {
        match self.connectivity_manager.active_network_capabilities() {
            Some(capabilities) => APPLICABLE_TRANSPORT_TYPES
                .iter()
                .any(|transport| capabilities.has_transport(*transport)),
            None => false,
        }
    }
}

/// An [`OnlineChecker`] returning a settable fixed value.
///
/// Shared between unit and integration tests of code that gates on
/// connectivity.
#[derive(Debug, Default)]
pub struct StubOnlineChecker {
    online: std::sync::atomic::AtomicBool,
}

impl StubOnlineChecker {
    /// Creates a stub reporting the given state.
    pub fn new(online: bool) -> Self {
        Self {
            online: std::sync::atomic::AtomicBool::new(online),
        }
    }

    /// Changes the reported state.
    pub fn set_online(&self, online: bool) {
        self.online
            .store(online, std::sync::atomic::Ordering::Relaxed);
    }
}

impl OnlineChecker for StubOnlineChecker {
    fn is_online(&self) -> bool {
        self.online.load(std::sync::atomic::Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every transport the checker asks about.
    struct RecordingCapabilities {
        queried: Rc<RefCell<Vec<TransportType>>>,
        present: Vec<TransportType>,
    }

    impl NetworkCapabilities for RecordingCapabilities {
        fn has_transport(&self, transport: TransportType) -> bool {
            self.queried.borrow_mut().push(transport);
            self.present.contains(&transport)
        }
    }

    struct FakeConnectivityManager {
        queried: Rc<RefCell<Vec<TransportType>>>,
        present: Option<Vec<TransportType>>,
    }

    impl FakeConnectivityManager {
        fn with_transports(present: Vec<TransportType>) -> Self {
            Self {
                queried: Rc::new(RefCell::new(Vec::new())),
                present: Some(present),
            }
        }

        fn without_active_network() -> Self {
            Self {
                queried: Rc::new(RefCell::new(Vec::new())),
                present: None,
            }
        }
    }

    impl ConnectivityManager for FakeConnectivityManager {
        fn active_network_capabilities(&self) -> Option<Box<dyn NetworkCapabilities>> {
            self.present.as_ref().map(|present| {
                Box::new(RecordingCapabilities {
                    queried: Rc::clone(&self.queried),
                    present: present.clone(),
                }) as Box<dyn NetworkCapabilities>
            })
        }
    }

    #[test]
    fn online_for_each_applicable_transport() {
        for transport in [
            TransportType::Cellular,
            TransportType::Wifi,
            TransportType::Ethernet,
        ] {
            let manager = FakeConnectivityManager::with_transports(vec![transport]);
            let checker = PlatformOnlineChecker::new(manager);
            assert!(checker.is_online(), "{transport:?} should count as online");
        }
    }

    #[test]
    fn offline_when_no_capability_record() {
        let checker = PlatformOnlineChecker::new(FakeConnectivityManager::without_active_network());
        assert!(!checker.is_online());
    }

    #[test]
    fn offline_when_no_applicable_transport_present() {
        let manager = FakeConnectivityManager::with_transports(vec![]);
        let checker = PlatformOnlineChecker::new(manager);
        assert!(!checker.is_online());
    }

    #[test]
    fn queries_every_applicable_transport_and_nothing_else() {
        let manager = FakeConnectivityManager::with_transports(vec![]);
        let queried = Rc::clone(&manager.queried);
        let checker = PlatformOnlineChecker::new(manager);

        checker.is_online();

        let queried = queried.borrow();
        for transport in [
            TransportType::Cellular,
            TransportType::Wifi,
            TransportType::Ethernet,
        ] {
            assert!(queried.contains(&transport), "{transport:?} not queried");
        }
        for transport in [
            TransportType::Bluetooth,
            TransportType::Vpn,
            TransportType::Usb,
            TransportType::WifiAware,
            TransportType::Lowpan,
        ] {
            assert!(!queried.contains(&transport), "{transport:?} was queried");
        }
    }

    #[test]
    fn stub_reports_the_set_value() {
        let stub = StubOnlineChecker::new(false);
        assert!(!stub.is_online());
        stub.set_online(true);
        assert!(stub.is_online());
    }
}
