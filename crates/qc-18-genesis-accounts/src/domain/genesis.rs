//! # Genesis Document
//!
//! Deferred-decode model of the genesis file.
//!
//! Only the top-level field order and the `app_state` module map are parsed
//! eagerly. Every other value stays as raw JSON text and is written back
//! exactly as it was read. A module is decoded only when asked for, and once
//! replaced it is re-encoded with the document's own formatting.
//!
//! ```text
//! {
//!   "chain_id": ...,               <- raw, verbatim
//!   "app_state": {                 <- AppState
//!     "auth": {...},               <- decoded on demand (AuthGenesisState)
//!     "bank": {...},               <- decoded on demand (BankGenesisState)
//!     "staking": {...}             <- raw, verbatim
//!   },
//!   ...                            <- raw, verbatim
//! }
//! ```

use indexmap::IndexMap;
use serde::de::{DeserializeOwned, Error as _};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::value::RawValue;
use serde_json::{Map, Value};
use shared_types::Coins;

use super::accounts::GenesisAccount;
use super::balances::Balance;

/// Top-level key holding the per-module states.
pub const APP_STATE_KEY: &str = "app_state";

/// Top-level key holding the chain identifier.
pub const CHAIN_ID_KEY: &str = "chain_id";

/// A module's state inside `app_state`.
#[derive(Debug, Clone)]
pub enum ModuleState {
    /// Untouched text from the file.
    Raw(Box<RawValue>),
    /// Replaced during this run.
    Decoded(Value),
}

impl ModuleState {
    fn to_value(&self) -> Result<Value, serde_json::Error> {
        match self {
            ModuleState::Raw(raw) => serde_json::from_str(raw.get()),
            ModuleState::Decoded(value) => Ok(value.clone()),
        }
    }
}

impl Serialize for ModuleState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ModuleState::Raw(raw) => raw.serialize(serializer),
            ModuleState::Decoded(value) => value.serialize(serializer),
        }
    }
}

/// Module name → module state, in file order.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    modules: IndexMap<String, ModuleState>,
}

impl AppState {
    fn from_raw(raw: &RawValue) -> Result<Self, serde_json::Error> {
        if raw.get().trim() == "null" {
            return Ok(Self::default());
        }

        let modules: IndexMap<String, Box<RawValue>> = serde_json::from_str(raw.get())?;
        Ok(Self {
            modules: modules
                .into_iter()
                .map(|(name, raw)| (name, ModuleState::Raw(raw)))
                .collect(),
        })
    }

    pub fn contains(&self, module: &str) -> bool {
        self.modules.contains_key(module)
    }

    pub fn module_names(&self) -> impl Iterator<Item = &str> {
        self.modules.keys().map(String::as_str)
    }

    /// Raw text of a module that has not been replaced.
    pub fn raw(&self, module: &str) -> Option<&str> {
        match self.modules.get(module)? {
            ModuleState::Raw(raw) => Some(raw.get()),
            ModuleState::Decoded(_) => None,
        }
    }

    /// Decode one module. `None` when the module is absent.
    pub fn module_json(&self, module: &str) -> Option<Result<Value, serde_json::Error>> {
        self.modules.get(module).map(ModuleState::to_value)
    }

    /// Replace a module's state, keeping its position.
    pub fn set_module(&mut self, module: &str, state: Value) {
        self.modules
            .insert(module.to_string(), ModuleState::Decoded(state));
    }
}

impl Serialize for AppState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.modules.len()))?;
        for (name, state) in &self.modules {
            map.serialize_entry(name, state)?;
        }
        map.end()
    }
}

/// The full genesis document.
#[derive(Debug, Clone)]
pub struct GenesisDocument {
    fields: IndexMap<String, Box<RawValue>>,
    app_state: AppState,
}

impl GenesisDocument {
    /// Parse a document. The top level must be an object with a non-empty
    /// string `chain_id` and an `app_state`.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let fields: IndexMap<String, Box<RawValue>> = serde_json::from_slice(bytes)?;

        let chain_id: String = match fields.get(CHAIN_ID_KEY) {
            Some(raw) => serde_json::from_str(raw.get()).map_err(|e| {
                serde_json::Error::custom(format!("chain_id must be a string: {}", e))
            })?,
            None => return Err(serde_json::Error::custom("genesis document has no chain_id")),
        };
        if chain_id.trim().is_empty() {
            return Err(serde_json::Error::custom("genesis document has an empty chain_id"));
        }

        let app_state = match fields.get(APP_STATE_KEY) {
            Some(raw) => AppState::from_raw(raw)?,
            None => return Err(serde_json::Error::custom("genesis document has no app_state")),
        };
        Ok(Self { fields, app_state })
    }

    /// Pretty-printed document, untouched values emitted verbatim.
    pub fn to_vec_pretty(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec_pretty(self)
    }

    pub fn chain_id(&self) -> Option<String> {
        self.fields
            .get(CHAIN_ID_KEY)
            .and_then(|raw| serde_json::from_str(raw.get()).ok())
    }

    /// Raw text of a top-level field other than `app_state`.
    pub fn raw_field(&self, key: &str) -> Option<&str> {
        if key == APP_STATE_KEY {
            return None;
        }
        self.fields.get(key).map(|raw| raw.get())
    }

    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub fn app_state_mut(&mut self) -> &mut AppState {
        &mut self.app_state
    }
}

impl Serialize for GenesisDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, raw) in &self.fields {
            if key == APP_STATE_KEY {
                map.serialize_entry(key, &self.app_state)?;
            } else {
                map.serialize_entry(key, raw)?;
            }
        }
        map.end()
    }
}

/// Decode `key` out of `fields`, leaving a placeholder so the key keeps its
/// position when written back. Missing and `null` both read as `None`.
fn take_field<T: DeserializeOwned>(
    fields: &mut Map<String, Value>,
    key: &str,
) -> Result<Option<T>, serde_json::Error> {
    match fields.get_mut(key).map(Value::take) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value).map(Some),
    }
}

fn into_object(value: Value, module: &str) -> Result<Map<String, Value>, serde_json::Error> {
    match value {
        Value::Object(fields) => Ok(fields),
        _ => Err(serde_json::Error::custom(format!(
            "{} genesis state must be a JSON object",
            module
        ))),
    }
}

/// Account registry state. Fields other than `accounts` pass through.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthGenesisState {
    pub accounts: Vec<GenesisAccount>,
    fields: Map<String, Value>,
}

impl AuthGenesisState {
    const ACCOUNTS_KEY: &'static str = "accounts";

    pub fn from_json(value: Value) -> Result<Self, serde_json::Error> {
        let mut fields = into_object(value, "auth")?;
        let accounts = take_field(&mut fields, Self::ACCOUNTS_KEY)?.unwrap_or_default();
        Ok(Self { accounts, fields })
    }

    pub fn to_json(&self) -> Result<Value, serde_json::Error> {
        let mut fields = self.fields.clone();
        fields.insert(
            Self::ACCOUNTS_KEY.to_string(),
            serde_json::to_value(&self.accounts)?,
        );
        Ok(Value::Object(fields))
    }
}

/// Balance ledger state. Fields other than `balances` and `supply` pass through.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BankGenesisState {
    pub balances: Vec<Balance>,
    pub supply: Coins,
    fields: Map<String, Value>,
}

impl BankGenesisState {
    const BALANCES_KEY: &'static str = "balances";
    const SUPPLY_KEY: &'static str = "supply";

    pub fn from_json(value: Value) -> Result<Self, serde_json::Error> {
        let mut fields = into_object(value, "bank")?;
        let balances = take_field(&mut fields, Self::BALANCES_KEY)?.unwrap_or_default();
        let supply = take_field(&mut fields, Self::SUPPLY_KEY)?.unwrap_or_default();
        Ok(Self {
            balances,
            supply,
            fields,
        })
    }

    pub fn to_json(&self) -> Result<Value, serde_json::Error> {
        let mut fields = self.fields.clone();
        fields.insert(
            Self::BALANCES_KEY.to_string(),
            serde_json::to_value(&self.balances)?,
        );
        fields.insert(
            Self::SUPPLY_KEY.to_string(),
            serde_json::to_value(&self.supply)?,
        );
        Ok(Value::Object(fields))
    }
}
