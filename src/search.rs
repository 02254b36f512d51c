use database::database::table::query::{MatchMode, NameField, NamePredicate, SearchBranch};

/// Builds the name search: prefix or substring on the first name, OR prefix or substring on the
/// last name. A term that was not supplied drops its two branches, so with neither term nothing matches.
pub fn name_filter(first_name: Option<&str>, last_name: Option<&str>) -> NamePredicate {
    NamePredicate::any_of(vec![
        starts_with(NameField::FirstName, first_name),
        contains(NameField::FirstName, first_name),
        starts_with(NameField::LastName, last_name),
        contains(NameField::LastName, last_name),
    ])
}

fn starts_with(field: NameField, term: Option<&str>) -> SearchBranch {
    SearchBranch::new(field, MatchMode::Prefix, term)
}

fn contains(field: NameField, term: Option<&str>) -> SearchBranch {
    SearchBranch::new(field, MatchMode::Contains, term)
}
