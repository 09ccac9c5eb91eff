use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;

use identifier::Credentials;
use identifier::ErrorMap;
use identifier::Identifier;
use identifier::IdentifierError;
use identifier::IdentifierOptions;
use identifier::IdentifierRegistry;
use identifier::Identity;

/// Identifier accepting one credential field value and counting its calls.
pub struct RecordingIdentifier {
    field: String,
    accepted: String,
    identity: Identity,
    calls: AtomicUsize,
    errors: Mutex<ErrorMap>,
}

impl RecordingIdentifier {
    pub fn new(field: &str, accepted: &str, identity: Identity) -> Self {
        Self {
            field: field.to_string(),
            accepted: accepted.to_string(),
            identity,
            calls: AtomicUsize::new(0),
            errors: Mutex::new(ErrorMap::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Identifier for RecordingIdentifier {
    fn identify(&self, credentials: &Credentials) -> Result<Option<Identity>, IdentifierError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let mut errors = self.errors.lock().unwrap();
        errors.clear();
        match credentials.get_str(&self.field) {
            Some(value) if value == self.accepted => Ok(Some(self.identity.clone())),
            Some(_) => {
                errors.insert(self.field.clone(), "invalid".to_string());
                Ok(None)
            }
            None => {
                errors.insert(self.field.clone(), "missing".to_string());
                Ok(None)
            }
        }
    }

    fn errors(&self) -> ErrorMap {
        self.errors.lock().unwrap().clone()
    }
}

/// Build a registry from named recording identifiers, in order.
pub fn registry_with(identifiers: &[(&str, Arc<RecordingIdentifier>)]) -> Arc<IdentifierRegistry> {
    let mut registry = IdentifierRegistry::new();
    for (name, identifier) in identifiers {
        let shared: Arc<dyn Identifier> = Arc::clone(identifier) as Arc<dyn Identifier>;
        registry
            .register(*name, shared, IdentifierOptions::new())
            .expect("Failed to register identifier");
    }
    Arc::new(registry)
}

pub fn error_map(field: &str, message: &str) -> ErrorMap {
    ErrorMap::from([(field.to_string(), message.to_string())])
}
