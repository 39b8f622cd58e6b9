use super::*;
use std::cell::Cell;

/// Provider with a scripted permission flow.
struct ScriptedDirectory {
    status: AuthorizationStatus,
    grant: bool,
    access_requested: Cell<bool>,
    fetched: Cell<bool>,
}

impl ScriptedDirectory {
    fn new(status: AuthorizationStatus, grant: bool) -> Self {
        Self {
            status,
            grant,
            access_requested: Cell::new(false),
            fetched: Cell::new(false),
        }
    }
}

impl DirectoryProvider for ScriptedDirectory {
    fn authorization_status(&self) -> AuthorizationStatus {
        self.status
    }

    fn request_access(&self) -> Result<bool, DirectoryError> {
        self.access_requested.set(true);
        Ok(self.grant)
    }

    fn fetch_all(&self) -> Result<Vec<RawRecord>, DirectoryError> {
        self.fetched.set(true);
        Ok(vec![RawRecord::new("John", "Smith")])
    }
}

mod fetch_authorized {
    use super::*;

    #[test]
    fn test_authorized_fetches_without_asking() {
        let provider = ScriptedDirectory::new(AuthorizationStatus::Authorized, false);

        let records = fetch_authorized(&provider).unwrap();

        assert_eq!(records.len(), 1);
        assert!(!provider.access_requested.get());
    }

    #[test]
    fn test_not_determined_granted_fetches() {
        let provider = ScriptedDirectory::new(AuthorizationStatus::NotDetermined, true);

        let records = fetch_authorized(&provider).unwrap();

        assert_eq!(records.len(), 1);
        assert!(provider.access_requested.get());
    }

    #[test]
    fn test_not_determined_refused_does_not_fetch() {
        let provider = ScriptedDirectory::new(AuthorizationStatus::NotDetermined, false);

        let err = fetch_authorized(&provider).unwrap_err();

        assert!(matches!(err, DirectoryError::PermissionDenied));
        assert!(!provider.fetched.get());
    }

    #[test]
    fn test_denied_does_not_fetch() {
        let provider = ScriptedDirectory::new(AuthorizationStatus::Denied, true);

        let err = fetch_authorized(&provider).unwrap_err();

        assert!(matches!(err, DirectoryError::PermissionDenied));
        assert!(!provider.access_requested.get());
        assert!(!provider.fetched.get());
    }

    #[test]
    fn test_restricted_does_not_fetch() {
        let provider = ScriptedDirectory::new(AuthorizationStatus::Restricted, true);

        let err = fetch_authorized(&provider).unwrap_err();

        assert!(matches!(err, DirectoryError::Restricted));
        assert!(!provider.fetched.get());
    }
}

mod static_directory {
    use super::*;

    #[test]
    fn test_static_directory_preserves_order() {
        let provider = StaticDirectory::new(vec![
            RawRecord::new("John", "Smith"),
            RawRecord::new("Amy", "Jones"),
        ]);

        let records = fetch_authorized(&provider).unwrap();

        assert_eq!(records[0].first_name.as_deref(), Some("John"));
        assert_eq!(records[1].first_name.as_deref(), Some("Amy"));
    }
}
