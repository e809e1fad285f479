use super::*;

#[test]
fn name_is_required() {
    assert!(validate(&DepartmentForm::default()).is_err());
    let form = DepartmentForm { dep_name: "  ".to_owned(), description: "x".to_owned() };
    assert_eq!(validate(&form), Err("Department name is required"));
    let form = DepartmentForm { dep_name: "Cardiology".to_owned(), description: String::new() };
    assert_eq!(validate(&form), Ok(()));
}

#[test]
fn delete_prompt_names_department() {
    assert_eq!(delete_prompt("Neurology"), "Are you sure you want to delete Neurology? This action cannot be undone.");
}
