use chrono::NaiveDate;
use vehireg_core::db::open_db_in_memory;
use vehireg_core::{
    BrandService, OwnerDraft, OwnerService, Ownership, OwnershipService, RepoError,
    SqliteBrandRepository, SqliteOwnerRepository, SqliteOwnershipRepository,
    SqliteVehicleModelRepository, SqliteVehicleRepository, VehicleDraft, VehicleModelService,
    VehicleService,
};

#[test]
fn brand_and_model_lifecycle_through_services() {
    let conn = open_db_in_memory().unwrap();
    let brands = BrandService::new(SqliteBrandRepository::try_new(&conn).unwrap());
    let models = VehicleModelService::new(SqliteVehicleModelRepository::try_new(&conn).unwrap());

    let renault = brands.create_brand("Renault").unwrap();
    assert!(matches!(
        brands.create_brand("Renault").unwrap_err(),
        RepoError::Duplicate { .. }
    ));

    let clio = models.create_model("Clio", renault).unwrap();
    assert!(models.create_model("Clio", renault).is_err());

    let blocked = brands.remove_brand(renault).unwrap_err();
    assert!(blocked.is_constraint_violation());
    assert_eq!(brands.fetch_all_brands().unwrap().len(), 1);

    models.remove_model(clio).unwrap();
    brands.remove_brand(renault).unwrap();
    assert!(brands.find_brand_by_id(renault).unwrap().is_none());
    assert!(models.fetch_all_models().unwrap().is_empty());
}

#[test]
fn ownership_lifecycle_through_services() {
    let conn = open_db_in_memory().unwrap();
    let brands = BrandService::new(SqliteBrandRepository::try_new(&conn).unwrap());
    let models = VehicleModelService::new(SqliteVehicleModelRepository::try_new(&conn).unwrap());
    let vehicles = VehicleService::new(SqliteVehicleRepository::try_new(&conn).unwrap());
    let owners = OwnerService::new(SqliteOwnerRepository::try_new(&conn).unwrap());
    let ownerships = OwnershipService::new(SqliteOwnershipRepository::try_new(&conn).unwrap());

    let brand = brands.create_brand("Peugeot").unwrap();
    let model = models.create_model("308", brand).unwrap();
    let vehicle = vehicles
        .create_vehicle(&VehicleDraft {
            registration: "KL-012-MN".to_string(),
            model_year: 2017,
            weight: 1200.0,
            horsepower: 130,
            fiscal_power: 7,
            model_id: model,
        })
        .unwrap();
    let owner = owners
        .create_owner(&OwnerDraft {
            last_name: "Bernard".to_string(),
            first_name: "Luc".to_string(),
            address: "8 rue Nationale".to_string(),
            postal_code: "59000".to_string(),
            city: "Lille".to_string(),
        })
        .unwrap();

    let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    ownerships
        .create_ownership(&Ownership::new(owner, vehicle, start))
        .unwrap();
    assert!(ownerships
        .create_ownership(&Ownership::new(owner, vehicle, start))
        .is_err());

    assert!(owners.remove_owner(owner).is_err());
    assert!(vehicles.remove_vehicle(vehicle).is_err());

    let end = NaiveDate::from_ymd_opt(2022, 6, 30).unwrap();
    ownerships
        .modify_ownership(&Ownership::new(owner, vehicle, start).with_end_date(Some(end)))
        .unwrap();
    let stored = ownerships.find_ownership(owner, vehicle).unwrap().unwrap();
    assert_eq!(stored.end_date, Some(end));

    ownerships.remove_ownership(owner, vehicle).unwrap();
    assert!(ownerships.remove_ownership(owner, vehicle).is_err());
    owners.remove_owner(owner).unwrap();
    vehicles.remove_vehicle(vehicle).unwrap();
    assert!(ownerships.fetch_all_ownerships().unwrap().is_empty());
}

#[test]
fn end_date_before_start_date_is_accepted() {
    let conn = open_db_in_memory().unwrap();
    let brand = BrandService::new(SqliteBrandRepository::try_new(&conn).unwrap())
        .create_brand("Fiat")
        .unwrap();
    let model = VehicleModelService::new(SqliteVehicleModelRepository::try_new(&conn).unwrap())
        .create_model("Panda", brand)
        .unwrap();
    let vehicle = VehicleService::new(SqliteVehicleRepository::try_new(&conn).unwrap())
        .create_vehicle(&VehicleDraft {
            registration: "OP-345-QR".to_string(),
            model_year: 2012,
            weight: 940.0,
            horsepower: 69,
            fiscal_power: 4,
            model_id: model,
        })
        .unwrap();
    let owner = OwnerService::new(SqliteOwnerRepository::try_new(&conn).unwrap())
        .create_owner(&OwnerDraft {
            last_name: "Roux".to_string(),
            first_name: "Emma".to_string(),
            address: "2 cours Mirabeau".to_string(),
            postal_code: "13100".to_string(),
            city: "Aix-en-Provence".to_string(),
        })
        .unwrap();
    let ownerships = OwnershipService::new(SqliteOwnershipRepository::try_new(&conn).unwrap());

    let reversed = Ownership::new(owner, vehicle, NaiveDate::from_ymd_opt(2022, 1, 1).unwrap())
        .with_end_date(NaiveDate::from_ymd_opt(2021, 1, 1));
    ownerships.create_ownership(&reversed).unwrap();

    let stored = ownerships.find_ownership(owner, vehicle).unwrap().unwrap();
    assert!(stored.end_date.unwrap() < stored.start_date);
}
