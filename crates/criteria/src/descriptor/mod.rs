//! Descriptor scanning: resolves a criteria type's declarations into an
//! immutable, process-wide-cached [`Descriptor`].

pub mod registry;

use crate::error::BuildError;
use crate::metadata::{
    criteria::{Criteria, Field},
    filter::FilterSpec,
    join::JoinSpec,
    select::SelectSpec,
    table::TableRef,
};
use crate::select::{ParsedColumns, SelectColumnsParser};
use crate::transform::Formatter;
use lazy_static::lazy_static;
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::debug;

/// The frozen shape of one criteria type: table binding plus resolved,
/// ordered field specs. Built once per type and shared.
#[derive(Debug, Clone)]
pub struct Descriptor {
    pub table: TableRef,
    pub fields: Vec<FieldDescriptor>,
}

#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub name: String,
    pub filters: Vec<FilterSpec>,
    pub transform: Option<Arc<dyn Formatter>>,
    pub joins: Vec<JoinDescriptor>,
    pub selects: Vec<SelectDescriptor>,
}

/// A join declaration with its statically-declared column list parsed
/// up front.
#[derive(Debug, Clone)]
pub struct JoinDescriptor {
    pub spec: JoinSpec,
    pub columns: Option<ParsedColumns>,
}

/// A projection override with its parser resolved; `columns` is `None`
/// for value-driven overrides, which parse at build time.
#[derive(Debug, Clone)]
pub struct SelectDescriptor {
    pub columns: Option<ParsedColumns>,
    pub parser: Arc<dyn SelectColumnsParser>,
}

lazy_static! {
    // Intentionally unbounded: one entry per criteria type, never
    // evicted for the life of the process.
    static ref DESCRIPTORS: RwLock<HashMap<TypeId, Arc<Descriptor>>> =
        RwLock::new(HashMap::new());
}

/// Get-or-create the descriptor for `T`. The first successful scan wins;
/// concurrent duplicate scans are discarded.
pub fn scan<T: Criteria>() -> Result<Arc<Descriptor>, BuildError> {
    let key = TypeId::of::<T>();
    {
        let cache = DESCRIPTORS.read().expect("descriptor cache lock poisoned");
        if let Some(descriptor) = cache.get(&key) {
            return Ok(descriptor.clone());
        }
    }
    let built = Arc::new(build::<T>()?);
    let mut cache = DESCRIPTORS.write().expect("descriptor cache lock poisoned");
    Ok(cache.entry(key).or_insert(built).clone())
}

fn build<T: Criteria>() -> Result<Descriptor, BuildError> {
    let table = T::table();
    let mut merged: Vec<Field> = Vec::new();
    for field in T::fields() {
        // A later declaration for the same logical field replaces the
        // earlier one at its original position.
        match merged.iter_mut().find(|existing| existing.name == field.name) {
            Some(existing) => *existing = field,
            None => merged.push(field),
        }
    }
    let fields = merged
        .into_iter()
        .map(|field| resolve_field(field, &table))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(
        criteria = std::any::type_name::<T>(),
        fields = fields.len(),
        "descriptor built"
    );
    Ok(Descriptor { table, fields })
}

fn resolve_field(field: Field, table: &TableRef) -> Result<FieldDescriptor, BuildError> {
    let transform = field
        .transform_tag
        .as_deref()
        .map(registry::formatter)
        .transpose()?;
    let joins = field
        .joins
        .into_iter()
        .map(|spec| resolve_join(spec, table))
        .collect::<Result<Vec<_>, _>>()?;
    let selects = field
        .selects
        .into_iter()
        .map(resolve_select)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(FieldDescriptor {
        name: field.name,
        filters: field.filters,
        transform,
        joins,
        selects,
    })
}

fn resolve_join(mut spec: JoinSpec, table: &TableRef) -> Result<JoinDescriptor, BuildError> {
    {
        let base = spec.base_mut();
        // A join with no explicit current-side binding joins against the
        // criteria's own table.
        if base.current_table.is_none() && base.current_alias.is_none() {
            base.current_table = Some(table.name.clone());
            base.current_alias = table.alias.clone();
        }
    }
    let parser = registry::select_parser(spec.parser_tag().unwrap_or(registry::DEFAULT_PARSER))?;
    let columns = spec
        .select_columns()
        .map(|raw| parser.parse(raw, true))
        .transpose()?
        // An all-whitespace column list means "no override".
        .filter(|parsed| !parsed.is_empty());
    Ok(JoinDescriptor { spec, columns })
}

fn resolve_select(spec: SelectSpec) -> Result<SelectDescriptor, BuildError> {
    let parser =
        registry::select_parser(spec.parser_tag.as_deref().unwrap_or(registry::DEFAULT_PARSER))?;
    let columns = spec
        .columns
        .as_deref()
        .map(|raw| parser.parse(raw, true))
        .transpose()?;
    Ok(SelectDescriptor { columns, parser })
}
