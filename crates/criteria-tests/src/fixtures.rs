//! Criteria types shared across the assembly tests.

use chrono::NaiveDate;
use criteria::{
    BaseProjection, Criteria, Field, FilterSpec, JoinType, ManyToManyJoin, SimpleJoin, TableRef,
    Value, WhereOperator,
};

/// Plain filter surface over a `Houses` table.
#[derive(Default)]
pub struct HouseCriteria {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub codes: Option<Vec<String>>,
    pub owner_id: Option<i64>,
}

impl Criteria for HouseCriteria {
    fn table() -> TableRef {
        TableRef::new("Houses")
    }

    fn fields() -> Vec<Field> {
        vec![
            Field::new("Id").filter(FilterSpec::new(WhereOperator::Eq)),
            Field::new("Name").filter(FilterSpec::new(WhereOperator::Like)),
            Field::new("DateFrom").filter(FilterSpec::new(WhereOperator::GtEq).field("Date")),
            Field::new("Codes").filter(FilterSpec::new(WhereOperator::In).field("Code")),
            Field::new("OwnerId")
                .filter(FilterSpec::new(WhereOperator::Eq))
                .filter(FilterSpec::new(WhereOperator::IsNotNull)),
        ]
    }

    fn value(&self, field: &str) -> Value {
        match field {
            "Id" => self.id.into(),
            "Name" => self.name.clone().into(),
            "DateFrom" => self.date_from.into(),
            "Codes" => self.codes.clone().into(),
            "OwnerId" => self.owner_id.into(),
            _ => Value::Null,
        }
    }
}

/// Three toggle joins with mixed explicit and unset orders.
#[derive(Default)]
pub struct PersonJoinOrder {
    pub with_houses: bool,
    pub with_airplans: bool,
    pub with_cars: bool,
}

impl Criteria for PersonJoinOrder {
    fn table() -> TableRef {
        TableRef::new("Persons")
    }

    fn fields() -> Vec<Field> {
        vec![
            Field::new("WithHouses")
                .join(SimpleJoin::new("Id", JoinType::Left, "Houses").joined_field("PersonId")),
            Field::new("WithAirplans").join(
                SimpleJoin::new("Id", JoinType::Left, "Airplans")
                    .joined_field("PersonId")
                    .order(2),
            ),
            Field::new("WithCars").join(
                SimpleJoin::new("Id", JoinType::Left, "Cars")
                    .joined_field("PersonId")
                    .order(1),
            ),
        ]
    }

    fn value(&self, field: &str) -> Value {
        match field {
            "WithHouses" => self.with_houses.into(),
            "WithAirplans" => self.with_airplans.into(),
            "WithCars" => self.with_cars.into(),
            _ => Value::Null,
        }
    }
}

/// Aliased base table, aliased joins and a join chained off another
/// join's alias.
#[derive(Default)]
pub struct AliasedPersons {
    pub with_houses: bool,
    pub with_airplans: bool,
    pub with_cars: bool,
    pub with_instruments: bool,
    pub name: Option<String>,
}

impl Criteria for AliasedPersons {
    fn table() -> TableRef {
        TableRef::aliased("Persons", "[p]")
    }

    fn fields() -> Vec<Field> {
        vec![
            Field::new("WithHouses").join(
                SimpleJoin::new("Id", JoinType::Left, "Houses")
                    .joined_alias("[h]")
                    .joined_field("PersonId"),
            ),
            Field::new("WithAirplans").join(
                SimpleJoin::new("Id", JoinType::Left, "Airplans")
                    .joined_alias("[a]")
                    .joined_field("PersonId")
                    .order(2),
            ),
            Field::new("WithCars").join(
                SimpleJoin::new("Id", JoinType::Left, "Cars")
                    .joined_alias("[c]")
                    .joined_field("PersonId")
                    .order(1),
            ),
            Field::new("WithInstruments").join(
                SimpleJoin::new("InstrId", JoinType::Left, "Instruments")
                    .joined_alias("[i]")
                    .joined_field("Instrument")
                    .current_table("Cars")
                    .current_alias("[c]"),
            ),
            Field::new("Name")
                .filter(FilterSpec::new(WhereOperator::Eq).table("Instruments").table_alias("[i]")),
        ]
    }

    fn value(&self, field: &str) -> Value {
        match field {
            "WithHouses" => self.with_houses.into(),
            "WithAirplans" => self.with_airplans.into(),
            "WithCars" => self.with_cars.into(),
            "WithInstruments" => self.with_instruments.into(),
            "Name" => self.name.clone().into(),
            _ => Value::Null,
        }
    }
}

/// Aliased many-to-many join through a link table.
#[derive(Default)]
pub struct AliasedCompanyLink {
    pub id: Option<i64>,
    pub with_company: bool,
}

impl Criteria for AliasedCompanyLink {
    fn table() -> TableRef {
        TableRef::aliased("Persons", "[p]")
    }

    fn fields() -> Vec<Field> {
        vec![
            Field::new("WithCompany").join(
                ManyToManyJoin::new(
                    "CompanyId",
                    JoinType::Left,
                    "Company",
                    "CompanyPersons",
                    "PersonId",
                    "CompanyId",
                )
                .joined_alias("[c]")
                .communication_alias("[cp]")
                .joined_field("Id"),
            ),
            Field::new("Id").filter(FilterSpec::new(WhereOperator::Eq)),
        ]
    }

    fn value(&self, field: &str) -> Value {
        match field {
            "WithCompany" => self.with_company.into(),
            "Id" => self.id.into(),
            _ => Value::Null,
        }
    }
}

/// Base declarations with a derived override for the identity filter.
#[derive(Default)]
pub struct RealHouseCriteria {
    pub id: Option<uuid::Uuid>,
    pub customer_id: Option<i64>,
    pub with_customers: bool,
}

impl Criteria for RealHouseCriteria {
    fn table() -> TableRef {
        TableRef::new("RealHouses")
    }

    fn fields() -> Vec<Field> {
        vec![
            // Base declarations.
            Field::new("Id").filter(FilterSpec::new(WhereOperator::Eq)),
            Field::new("CustomerId").filter(FilterSpec::new(WhereOperator::Eq)),
            Field::new("WithCustomers")
                .join(SimpleJoin::new("CustomerId", JoinType::Inner, "Customers")),
            // Derived override: rebinds the identity filter onto HouseId.
            Field::new("Id").filter(FilterSpec::new(WhereOperator::Eq).field("HouseId")),
        ]
    }

    fn value(&self, field: &str) -> Value {
        match field {
            "Id" => self.id.into(),
            "CustomerId" => self.customer_id.into(),
            "WithCustomers" => self.with_customers.into(),
            _ => Value::Null,
        }
    }
}

/// Aggregate projection with grouping columns.
#[derive(Default)]
pub struct HouseGrouping;

impl Criteria for HouseGrouping {
    fn table() -> TableRef {
        TableRef::new("Houses")
    }

    fn fields() -> Vec<Field> {
        Vec::new()
    }

    fn value(&self, _field: &str) -> Value {
        Value::Null
    }

    fn projection(&self) -> BaseProjection {
        BaseProjection::Expression("Count(1) , Houses.OwnerId , Houses.Category".to_string())
    }

    fn group_by(&self) -> Vec<String> {
        vec!["Houses.OwnerId".to_string(), "Houses.Category".to_string()]
    }
}
