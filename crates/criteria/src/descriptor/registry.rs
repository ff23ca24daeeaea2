//! Static registries resolving declaration tags into capability
//! implementations. Resolution happens once, at descriptor-build time.

use crate::error::BuildError;
use crate::select::{SelectColumnsParser, SelectParser};
use crate::transform::{Formatter, LikeFormatter};
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Tag of the built-in column-list parser.
pub const DEFAULT_PARSER: &str = "default";

/// Tag of the built-in `%value%` transform.
pub const LIKE_FORMATTER: &str = "like";

lazy_static! {
    static ref FORMATTERS: RwLock<HashMap<String, Arc<dyn Formatter>>> = {
        let mut map: HashMap<String, Arc<dyn Formatter>> = HashMap::new();
        map.insert(LIKE_FORMATTER.to_string(), Arc::new(LikeFormatter));
        RwLock::new(map)
    };
    static ref SELECT_PARSERS: RwLock<HashMap<String, Arc<dyn SelectColumnsParser>>> = {
        let mut map: HashMap<String, Arc<dyn SelectColumnsParser>> = HashMap::new();
        map.insert(DEFAULT_PARSER.to_string(), Arc::new(SelectParser));
        RwLock::new(map)
    };
}

pub fn register_formatter(tag: &str, formatter: Arc<dyn Formatter>) {
    let mut map = FORMATTERS.write().expect("formatter registry lock poisoned");
    map.insert(tag.to_string(), formatter);
}

pub fn formatter(tag: &str) -> Result<Arc<dyn Formatter>, BuildError> {
    let map = FORMATTERS.read().expect("formatter registry lock poisoned");
    map.get(tag).cloned().ok_or_else(|| {
        BuildError::Configuration(format!("no formatter registered for tag `{tag}`"))
    })
}

pub fn register_select_parser(tag: &str, parser: Arc<dyn SelectColumnsParser>) {
    let mut map = SELECT_PARSERS
        .write()
        .expect("select parser registry lock poisoned");
    map.insert(tag.to_string(), parser);
}

pub fn select_parser(tag: &str) -> Result<Arc<dyn SelectColumnsParser>, BuildError> {
    let map = SELECT_PARSERS
        .read()
        .expect("select parser registry lock poisoned");
    map.get(tag).cloned().ok_or_else(|| {
        BuildError::Configuration(format!("no select parser registered for tag `{tag}`"))
    })
}
