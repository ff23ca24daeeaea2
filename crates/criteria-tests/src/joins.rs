#[cfg(test)]
mod tests {
    use crate::fixtures::{AliasedCompanyLink, AliasedPersons, PersonJoinOrder};
    use criteria::{
        AddOnTarget, Criteria, Field, FilterSpec, JoinType, ManyToManyJoin, QueryBuilder,
        SimpleJoin, TableRef, Value, WhereOperator,
    };

    #[test]
    fn explicit_orders_emit_first_then_declaration_order() {
        let query = QueryBuilder::new(&PersonJoinOrder {
            with_houses: true,
            with_airplans: true,
            with_cars: true,
        })
        .build()
        .expect("build");
        assert_eq!(
            query.sql,
            "Select Persons.* \
             , 0 as SplitOnCarsPersonId , Cars.* \
             , 0 as SplitOnAirplansPersonId , Airplans.* \
             , 0 as SplitOnHousesPersonId , Houses.* \
             from Persons \
             LEFT JOIN Cars on Cars.PersonId = Persons.Id \
             LEFT JOIN Airplans on Airplans.PersonId = Persons.Id \
             LEFT JOIN Houses on Houses.PersonId = Persons.Id"
        );
        assert_eq!(
            query.split_on,
            "SplitOnCarsPersonId,SplitOnAirplansPersonId,SplitOnHousesPersonId"
        );
    }

    #[test]
    fn toggled_off_join_keeps_its_split_slot() {
        let query = QueryBuilder::new(&PersonJoinOrder {
            with_houses: true,
            with_airplans: true,
            with_cars: false,
        })
        .build()
        .expect("build");
        assert_eq!(
            query.sql,
            "Select Persons.* \
             , 0 as SplitOnCarsPersonId \
             , 0 as SplitOnAirplansPersonId , Airplans.* \
             , 0 as SplitOnHousesPersonId , Houses.* \
             from Persons \
             LEFT JOIN Airplans on Airplans.PersonId = Persons.Id \
             LEFT JOIN Houses on Houses.PersonId = Persons.Id"
        );
        // The slot for the off join is still reserved.
        assert_eq!(
            query.split_on,
            "SplitOnCarsPersonId,SplitOnAirplansPersonId,SplitOnHousesPersonId"
        );
    }

    #[test]
    fn aliases_qualify_joins_projections_and_filters() {
        let query = QueryBuilder::new(&AliasedPersons {
            with_houses: true,
            with_airplans: true,
            with_cars: true,
            with_instruments: true,
            name: Some("Instrument #1".into()),
        })
        .build()
        .expect("build");
        assert_eq!(
            query.sql,
            "Select [p].* \
             , 0 as SplitOnCarsPersonId , [c].* \
             , 0 as SplitOnAirplansPersonId , [a].* \
             , 0 as SplitOnHousesPersonId , [h].* \
             , 0 as SplitOnInstrumentsInstrument , [i].* \
             from Persons [p] \
             LEFT JOIN Cars [c] on [c].PersonId = [p].Id \
             LEFT JOIN Airplans [a] on [a].PersonId = [p].Id \
             LEFT JOIN Houses [h] on [h].PersonId = [p].Id \
             LEFT JOIN Instruments [i] on [i].Instrument = [c].InstrId \
             WHERE [i].Name = @iName"
        );
        assert_eq!(query.parameters.get("iName"), Some(&Value::String("Instrument #1".into())));
    }

    #[test]
    fn many_to_many_emits_two_join_lines_and_one_projection() {
        let query = QueryBuilder::new(&AliasedCompanyLink {
            id: Some(1),
            with_company: true,
        })
        .build()
        .expect("build");
        assert_eq!(
            query.sql,
            "Select [p].* , 0 as SplitOnCompanyId , [c].* \
             from Persons [p] \
             LEFT JOIN CompanyPersons [cp] on [cp].PersonId = [p].CompanyId \
             LEFT JOIN Company [c] on [c].Id = [cp].CompanyId \
             WHERE [p].Id = @pId"
        );
        assert_eq!(query.split_on, "SplitOnCompanyId");
        assert_eq!(query.parameters.get("pId"), Some(&Value::Int(1)));
    }

    struct AnotherTableLink {
        with_another: bool,
    }

    impl Criteria for AnotherTableLink {
        fn table() -> TableRef {
            TableRef::new("TableName")
        }

        fn fields() -> Vec<Field> {
            vec![Field::new("WithAnotherTable").join(
                ManyToManyJoin::new(
                    "CurrentId",
                    JoinType::Left,
                    "AnotherTable",
                    "AnotherTableCurrentTable",
                    "CurrentId",
                    "AnotherId",
                )
                .joined_field("AnotherId"),
            )]
        }

        fn value(&self, field: &str) -> Value {
            match field {
                "WithAnotherTable" => self.with_another.into(),
                _ => Value::Null,
            }
        }
    }

    #[test]
    fn many_to_many_without_aliases_uses_table_names() {
        let query = QueryBuilder::new(&AnotherTableLink { with_another: true })
            .build()
            .expect("build");
        assert_eq!(
            query.sql,
            "Select TableName.* , 0 as SplitOnAnotherTableAnotherId , AnotherTable.* \
             from TableName \
             LEFT JOIN AnotherTableCurrentTable on \
             AnotherTableCurrentTable.CurrentId = TableName.CurrentId \
             LEFT JOIN AnotherTable on AnotherTable.AnotherId = AnotherTableCurrentTable.AnotherId"
        );

        let off = QueryBuilder::new(&AnotherTableLink { with_another: false })
            .build()
            .expect("build");
        assert_eq!(
            off.sql,
            "Select TableName.* , 0 as SplitOnAnotherTableAnotherId from TableName"
        );
        assert_eq!(off.split_on, "SplitOnAnotherTableAnotherId");
    }

    struct HousePersonInfo {
        with_persons_and_info: bool,
    }

    impl Criteria for HousePersonInfo {
        fn table() -> TableRef {
            TableRef::new("Houses")
        }

        fn fields() -> Vec<Field> {
            vec![
                Field::new("WithPersonsAndInfo")
                    .join(
                        SimpleJoin::new("Id", JoinType::Left, "Persons")
                            .joined_field("HouseId")
                            .order(1),
                    )
                    .join(
                        SimpleJoin::new("Id", JoinType::Inner, "PersonInfos")
                            .current_table("Persons")
                            .joined_field("PersonId")
                            .order(2),
                    ),
            ]
        }

        fn value(&self, field: &str) -> Value {
            match field {
                "WithPersonsAndInfo" => self.with_persons_and_info.into(),
                _ => Value::Null,
            }
        }
    }

    #[test]
    fn one_field_may_chain_several_joins() {
        let query = QueryBuilder::new(&HousePersonInfo {
            with_persons_and_info: true,
        })
        .build()
        .expect("build");
        assert_eq!(
            query.sql,
            "Select Houses.* \
             , 0 as SplitOnPersonsHouseId , Persons.* \
             , 0 as SplitOnPersonInfosPersonId , PersonInfos.* \
             from Houses \
             LEFT JOIN Persons on Persons.HouseId = Houses.Id \
             INNER JOIN PersonInfos on PersonInfos.PersonId = Persons.Id"
        );
        assert_eq!(
            query.split_on,
            "SplitOnPersonsHouseId,SplitOnPersonInfosPersonId"
        );
    }

    struct HouseOwnerReference {
        owner_ids: Option<Vec<i64>>,
    }

    impl Criteria for HouseOwnerReference {
        fn table() -> TableRef {
            TableRef::new("Houses")
        }

        fn fields() -> Vec<Field> {
            vec![
                Field::new("OwnerIds")
                    .join(
                        SimpleJoin::new("HouseId", JoinType::Left, "Owners")
                            .select_columns("Owners:")
                            .no_split(),
                    )
                    .filter(
                        FilterSpec::new(WhereOperator::In)
                            .field("Id")
                            .table("Owners"),
                    ),
            ]
        }

        fn value(&self, field: &str) -> Value {
            match field {
                "OwnerIds" => self.owner_ids.clone().into(),
                _ => Value::Null,
            }
        }
    }

    #[test]
    fn no_split_join_suppresses_marker_and_projection_but_not_the_join() {
        let query = QueryBuilder::new(&HouseOwnerReference {
            owner_ids: Some(vec![1, 2, 3, 4]),
        })
        .build()
        .expect("build");
        assert_eq!(
            query.sql,
            "Select Houses.* from Houses \
             LEFT JOIN Owners on Owners.HouseId = Houses.HouseId \
             WHERE Owners.Id in @OwnersId"
        );
        // Every declared join is no-split, so there is nothing to split on.
        assert_eq!(query.split_on, "");
    }

    struct OwnersWithAddOn {
        with_owners: bool,
    }

    impl Criteria for OwnersWithAddOn {
        fn table() -> TableRef {
            TableRef::new("Houses")
        }

        fn fields() -> Vec<Field> {
            vec![Field::new("WithOwners").join(
                SimpleJoin::new("HouseId", JoinType::Left, "Owners")
                    .select_columns("Owners:")
                    .add_on("Owners.OwnerId in (1,2,3)"),
            )]
        }

        fn value(&self, field: &str) -> Value {
            match field {
                "WithOwners" => self.with_owners.into(),
                _ => Value::Null,
            }
        }
    }

    #[test]
    fn add_on_clause_extends_the_on_predicate() {
        let query = QueryBuilder::new(&OwnersWithAddOn { with_owners: true })
            .build()
            .expect("build");
        assert_eq!(
            query.sql,
            "Select Houses.* , 0 as SplitOnOwnersHouseId from Houses \
             LEFT JOIN Owners on Owners.HouseId = Houses.HouseId AND Owners.OwnerId in (1,2,3)"
        );
    }

    struct HousePeople {
        with_people: bool,
    }

    impl Criteria for HousePeople {
        fn table() -> TableRef {
            TableRef::new("Houses")
        }

        fn fields() -> Vec<Field> {
            vec![Field::new("WithPeople").join(
                ManyToManyJoin::new(
                    "HouseId",
                    JoinType::Left,
                    "People",
                    "HousePeople",
                    "HouseId",
                    "PeopleId",
                )
                .joined_field("PeopleId")
                .add_on("HousePeople.Required = 1")
                .add_on_target(AddOnTarget::Communication),
            )]
        }

        fn value(&self, field: &str) -> Value {
            match field {
                "WithPeople" => self.with_people.into(),
                _ => Value::Null,
            }
        }
    }

    #[test]
    fn many_to_many_add_on_lands_on_the_communication_fragment() {
        let query = QueryBuilder::new(&HousePeople { with_people: true })
            .build()
            .expect("build");
        assert_eq!(
            query.sql,
            "Select Houses.* , 0 as SplitOnPeoplePeopleId , People.* from Houses \
             LEFT JOIN HousePeople on HousePeople.HouseId = Houses.HouseId \
             AND HousePeople.Required = 1 \
             LEFT JOIN People on People.PeopleId = HousePeople.PeopleId"
        );
    }

    struct OwnerNameLookup {
        owner_name: Option<String>,
        with_owners: bool,
    }

    impl Criteria for OwnerNameLookup {
        fn table() -> TableRef {
            TableRef::new("Houses")
        }

        fn fields() -> Vec<Field> {
            vec![Field::new("OwnerName")
                .join(
                    SimpleJoin::new("OwnerId", JoinType::Left, "Owners")
                        .joined_field("Id")
                        .including("WithOwners"),
                )
                .filter(
                    FilterSpec::new(WhereOperator::Like)
                        .field("OwnerName")
                        .table("Owners"),
                )]
        }

        fn value(&self, field: &str) -> Value {
            match field {
                "OwnerName" => self.owner_name.clone().into(),
                "WithOwners" => self.with_owners.into(),
                _ => Value::Null,
            }
        }
    }

    #[test]
    fn including_gate_compiles_the_join_only_when_open() {
        let on = QueryBuilder::new(&OwnerNameLookup {
            owner_name: Some("Vasya".into()),
            with_owners: true,
        })
        .build()
        .expect("build");
        assert_eq!(
            on.sql,
            "Select Houses.* , 0 as SplitOnOwnersId , Owners.* from Houses \
             LEFT JOIN Owners on Owners.Id = Houses.OwnerId \
             WHERE Owners.OwnerName Like @OwnersOwnerName"
        );
        assert_eq!(on.split_on, "SplitOnOwnersId");
    }

    #[test]
    fn closed_including_gate_keeps_the_filter_and_the_split_slot() {
        let off = QueryBuilder::new(&OwnerNameLookup {
            owner_name: Some("Vasya".into()),
            with_owners: false,
        })
        .build()
        .expect("build");
        // The join line and projection are omitted; the filter legitimately
        // references a table that is never joined.
        assert_eq!(
            off.sql,
            "Select Houses.* , 0 as SplitOnOwnersId from Houses \
             WHERE Owners.OwnerName Like @OwnersOwnerName"
        );
        assert_eq!(off.split_on, "SplitOnOwnersId");
        assert_eq!(
            off.parameters.get("OwnersOwnerName"),
            Some(&Value::String("%Vasya%".into()))
        );
    }

    #[test]
    fn all_no_split_joins_empty_the_split_list() {
        struct ExistenceOnly {
            with_owners: bool,
        }

        impl Criteria for ExistenceOnly {
            fn table() -> TableRef {
                TableRef::new("Houses")
            }

            fn fields() -> Vec<Field> {
                vec![Field::new("WithOwners").join(
                    SimpleJoin::new("HouseId", JoinType::Left, "Owners")
                        .select_columns("Owners:")
                        .no_split(),
                )]
            }

            fn value(&self, field: &str) -> Value {
                match field {
                    "WithOwners" => self.with_owners.into(),
                    _ => Value::Null,
                }
            }
        }

        let query = QueryBuilder::new(&ExistenceOnly { with_owners: true })
            .build()
            .expect("build");
        assert_eq!(query.split_on, "");
    }

    struct DefaultJoinedField {
        with_persons: bool,
    }

    impl Criteria for DefaultJoinedField {
        fn table() -> TableRef {
            TableRef::new("Houses")
        }

        fn fields() -> Vec<Field> {
            vec![
                Field::new("WithPersons")
                    .join(SimpleJoin::new("HouseId", JoinType::Left, "Persons")),
            ]
        }

        fn value(&self, field: &str) -> Value {
            match field {
                "WithPersons" => self.with_persons.into(),
                _ => Value::Null,
            }
        }
    }

    #[test]
    fn joined_field_defaults_to_the_current_field() {
        let query = QueryBuilder::new(&DefaultJoinedField { with_persons: true })
            .build()
            .expect("build");
        assert_eq!(
            query.sql,
            "Select Houses.* , 0 as SplitOnPersonsHouseId , Persons.* from Houses \
             LEFT JOIN Persons on Persons.HouseId = Houses.HouseId"
        );
    }

    struct NonBooleanToggle {
        owner_id: Option<i64>,
    }

    impl Criteria for NonBooleanToggle {
        fn table() -> TableRef {
            TableRef::new("Houses")
        }

        fn fields() -> Vec<Field> {
            vec![
                Field::new("OwnerId")
                    .join(
                        SimpleJoin::new("Id", JoinType::Left, "HouseOwners")
                            .joined_field("HouseId")
                            .select_columns("HouseOwners:")
                            .no_split(),
                    )
                    .filter(
                        FilterSpec::new(WhereOperator::Eq)
                            .field("OwnerId")
                            .table("HouseOwners"),
                    ),
            ]
        }

        fn value(&self, field: &str) -> Value {
            match field {
                "OwnerId" => self.owner_id.into(),
                _ => Value::Null,
            }
        }
    }

    #[test]
    fn any_non_null_value_activates_a_join_toggle() {
        let query = QueryBuilder::new(&NonBooleanToggle { owner_id: Some(1) })
            .build()
            .expect("build");
        assert_eq!(
            query.sql,
            "Select Houses.* from Houses \
             LEFT JOIN HouseOwners on HouseOwners.HouseId = Houses.Id \
             WHERE HouseOwners.OwnerId = @HouseOwnersOwnerId"
        );
        assert_eq!(query.split_on, "");
    }
}
