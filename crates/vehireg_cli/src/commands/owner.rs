use super::{deleted, missing, read, render, saved, CommandResult, NOT_FOUND, SAVE_FAILED};
use crate::config::EntityAction;
use crate::form::OwnerInput;
use rusqlite::Connection;
use tabled::Tabled;
use vehireg_core::{Owner, OwnerService, SqliteOwnerRepository};

#[derive(Tabled)]
struct OwnerRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Last name")]
    last_name: String,
    #[tabled(rename = "First name")]
    first_name: String,
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "Postal code")]
    postal_code: String,
    #[tabled(rename = "City")]
    city: String,
}

impl From<&Owner> for OwnerRow {
    fn from(owner: &Owner) -> Self {
        Self {
            id: owner.id,
            last_name: owner.last_name.clone(),
            first_name: owner.first_name.clone(),
            address: owner.address.clone(),
            postal_code: owner.postal_code.clone(),
            city: owner.city.clone(),
        }
    }
}

pub(super) fn run(
    conn: &Connection,
    action: EntityAction<OwnerInput>,
    json: bool,
) -> CommandResult<String> {
    let service = OwnerService::new(read(SqliteOwnerRepository::try_new(conn))?);
    match action {
        EntityAction::List => {
            let owners = read(service.fetch_all_owners())?;
            render(&owners, owners.iter().map(OwnerRow::from).collect(), json)
        }
        EntityAction::Show { id } => {
            let owner = read(service.find_owner_by_id(id))?
                .ok_or_else(|| missing(NOT_FOUND, "owner", id.to_string()))?;
            render(&owner, vec![OwnerRow::from(&owner)], json)
        }
        EntityAction::Add { input } => {
            let draft = input.validate()?;
            saved(service.create_owner(&draft))
        }
        EntityAction::Edit { id, input } => {
            let stored = read(service.find_owner_by_id(id))?
                .ok_or_else(|| missing(SAVE_FAILED, "owner", id.to_string()))?;
            let draft = input.or_stored(&stored).validate()?;
            saved(service.modify_owner(id, &draft))
        }
        EntityAction::Delete { id } => deleted(service.remove_owner(id)),
    }
}
