use vehireg_core::db::open_db_in_memory;
use vehireg_core::{
    BrandRepository, RepoError, SqliteBrandRepository, SqliteVehicleModelRepository,
    VehicleModelRepository,
};

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBrandRepository::try_new(&conn).unwrap();

    let id = repo.create_brand("Renault").unwrap();

    let loaded = repo.get_brand(id).unwrap().unwrap();
    assert_eq!(loaded.id, id);
    assert_eq!(loaded.name, "Renault");
    assert!(repo.brand_exists("Renault", None).unwrap());
}

#[test]
fn get_missing_brand_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBrandRepository::try_new(&conn).unwrap();

    assert!(repo.get_brand(42).unwrap().is_none());
}

#[test]
fn list_returns_brands_in_storage_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBrandRepository::try_new(&conn).unwrap();

    assert!(repo.list_brands().unwrap().is_empty());
    repo.create_brand("Renault").unwrap();
    repo.create_brand("Alpine").unwrap();
    repo.create_brand("Peugeot").unwrap();

    let names = repo
        .list_brands()
        .unwrap()
        .into_iter()
        .map(|brand| brand.name)
        .collect::<Vec<_>>();
    assert_eq!(names, ["Renault", "Alpine", "Peugeot"]);
}

#[test]
fn duplicate_name_is_rejected_and_store_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBrandRepository::try_new(&conn).unwrap();

    repo.create_brand("Renault").unwrap();
    let err = repo.create_brand("Renault").unwrap_err();

    assert!(matches!(err, RepoError::Duplicate { entity: "brand", .. }));
    assert_eq!(repo.list_brands().unwrap().len(), 1);
}

#[test]
fn update_to_own_name_succeeds_but_to_other_name_fails() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBrandRepository::try_new(&conn).unwrap();

    let renault = repo.create_brand("Renault").unwrap();
    let peugeot = repo.create_brand("Peugeot").unwrap();

    repo.update_brand(renault, "Renault").unwrap();
    assert!(!repo.brand_exists("Renault", Some(renault)).unwrap());

    let err = repo.update_brand(peugeot, "Renault").unwrap_err();
    assert!(matches!(err, RepoError::Duplicate { .. }));
    assert_eq!(repo.get_brand(peugeot).unwrap().unwrap().name, "Peugeot");
}

#[test]
fn update_persists_new_name() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBrandRepository::try_new(&conn).unwrap();

    let id = repo.create_brand("Simca").unwrap();
    repo.update_brand(id, "Talbot").unwrap();

    assert_eq!(repo.get_brand(id).unwrap().unwrap().name, "Talbot");
}

#[test]
fn update_missing_brand_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBrandRepository::try_new(&conn).unwrap();

    let err = repo.update_brand(7, "Ghost").unwrap_err();
    assert!(matches!(err, RepoError::NotFound { entity: "brand", ref key } if key == "7"));
}

#[test]
fn delete_is_blocked_while_models_reference_brand() {
    let conn = open_db_in_memory().unwrap();
    let brands = SqliteBrandRepository::try_new(&conn).unwrap();
    let models = SqliteVehicleModelRepository::try_new(&conn).unwrap();

    let brand_id = brands.create_brand("Renault").unwrap();
    models.create_model("Clio", brand_id).unwrap();
    models.create_model("Megane", brand_id).unwrap();

    let err = brands.delete_brand(brand_id).unwrap_err();
    assert!(matches!(
        err,
        RepoError::HasDependents {
            entity: "brand",
            dependent: "model",
            count: 2,
            ..
        }
    ));
    assert!(brands.get_brand(brand_id).unwrap().is_some());
}

#[test]
fn delete_without_dependents_removes_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBrandRepository::try_new(&conn).unwrap();

    let id = repo.create_brand("Panhard").unwrap();
    repo.delete_brand(id).unwrap();

    assert!(repo.get_brand(id).unwrap().is_none());
    let err = repo.delete_brand(id).unwrap_err();
    assert!(err.is_not_found());
}
