use chrono::NaiveDate;
use vehireg_core::db::open_db_in_memory;
use vehireg_core::{
    BrandRepository, OwnerDraft, OwnerRepository, Ownership, OwnershipRepository, RepoError,
    SqliteBrandRepository, SqliteOwnerRepository, SqliteOwnershipRepository,
    SqliteVehicleModelRepository, SqliteVehicleRepository, VehicleDraft, VehicleModelRepository,
    VehicleRepository,
};

fn owner_draft(last_name: &str, first_name: &str) -> OwnerDraft {
    OwnerDraft {
        last_name: last_name.to_string(),
        first_name: first_name.to_string(),
        address: "12 avenue Foch".to_string(),
        postal_code: "75016".to_string(),
        city: "Paris".to_string(),
    }
}

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteOwnerRepository::try_new(&conn).unwrap();

    let id = repo.create_owner(&owner_draft("Dupont", "Jean")).unwrap();

    let loaded = repo.get_owner(id).unwrap().unwrap();
    assert_eq!(loaded.to_draft(), owner_draft("Dupont", "Jean"));
    assert_eq!(loaded.full_name(), "Jean Dupont");
}

#[test]
fn identical_owners_are_distinct_records() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteOwnerRepository::try_new(&conn).unwrap();

    let first = repo.create_owner(&owner_draft("Dupont", "Jean")).unwrap();
    let second = repo.create_owner(&owner_draft("Dupont", "Jean")).unwrap();

    assert_ne!(first, second);
    let owners = repo.list_owners().unwrap();
    assert_eq!(owners.len(), 2);
    assert_ne!(owners[0], owners[1]);
}

#[test]
fn update_replaces_all_fields() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteOwnerRepository::try_new(&conn).unwrap();
    let id = repo.create_owner(&owner_draft("Dupont", "Jean")).unwrap();

    let mut moved = owner_draft("Dupont", "Jean");
    moved.address = "1 quai Saint-Vincent".to_string();
    moved.postal_code = "69001".to_string();
    moved.city = "Lyon".to_string();
    repo.update_owner(id, &moved).unwrap();

    let loaded = repo.get_owner(id).unwrap().unwrap();
    assert_eq!(loaded.city, "Lyon");
    assert_eq!(loaded.postal_code, "69001");

    let err = repo.update_owner(id + 100, &moved).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn delete_is_blocked_while_ownership_references_owner() {
    let conn = open_db_in_memory().unwrap();
    let brand = SqliteBrandRepository::try_new(&conn)
        .unwrap()
        .create_brand("Citroen")
        .unwrap();
    let model = SqliteVehicleModelRepository::try_new(&conn)
        .unwrap()
        .create_model("C3", brand)
        .unwrap();
    let vehicle = SqliteVehicleRepository::try_new(&conn)
        .unwrap()
        .create_vehicle(&VehicleDraft {
            registration: "GH-789-IJ".to_string(),
            model_year: 2021,
            weight: 1050.0,
            horsepower: 83,
            fiscal_power: 4,
            model_id: model,
        })
        .unwrap();
    let owners = SqliteOwnerRepository::try_new(&conn).unwrap();
    let ownerships = SqliteOwnershipRepository::try_new(&conn).unwrap();
    let owner = owners.create_owner(&owner_draft("Dupont", "Jean")).unwrap();
    ownerships
        .create_ownership(&Ownership::new(
            owner,
            vehicle,
            NaiveDate::from_ymd_opt(2021, 6, 15).unwrap(),
        ))
        .unwrap();

    let err = owners.delete_owner(owner).unwrap_err();
    assert!(matches!(
        err,
        RepoError::HasDependents {
            entity: "owner",
            dependent: "ownership",
            count: 1,
            ..
        }
    ));

    ownerships.delete_ownership(owner, vehicle).unwrap();
    owners.delete_owner(owner).unwrap();
    assert!(owners.get_owner(owner).unwrap().is_none());
    assert!(owners.delete_owner(owner).unwrap_err().is_not_found());
}
