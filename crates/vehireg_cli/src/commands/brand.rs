use super::{deleted, missing, read, render, saved, CommandResult, NOT_FOUND, SAVE_FAILED};
use crate::config::EntityAction;
use crate::form::BrandInput;
use rusqlite::Connection;
use tabled::Tabled;
use vehireg_core::{Brand, BrandService, SqliteBrandRepository};

#[derive(Tabled)]
struct BrandRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
}

impl From<&Brand> for BrandRow {
    fn from(brand: &Brand) -> Self {
        Self {
            id: brand.id,
            name: brand.name.clone(),
        }
    }
}

pub(super) fn run(
    conn: &Connection,
    action: EntityAction<BrandInput>,
    json: bool,
) -> CommandResult<String> {
    let service = BrandService::new(read(SqliteBrandRepository::try_new(conn))?);
    match action {
        EntityAction::List => {
            let brands = read(service.fetch_all_brands())?;
            render(&brands, brands.iter().map(BrandRow::from).collect(), json)
        }
        EntityAction::Show { id } => {
            let brand = read(service.find_brand_by_id(id))?
                .ok_or_else(|| missing(NOT_FOUND, "brand", id.to_string()))?;
            render(&brand, vec![BrandRow::from(&brand)], json)
        }
        EntityAction::Add { input } => {
            let name = input.validate()?;
            saved(service.create_brand(&name))
        }
        EntityAction::Edit { id, input } => {
            let stored = read(service.find_brand_by_id(id))?
                .ok_or_else(|| missing(SAVE_FAILED, "brand", id.to_string()))?;
            let name = BrandInput {
                name: input.name.or(Some(stored.name)),
            }
            .validate()?;
            saved(service.modify_brand(id, &name))
        }
        EntityAction::Delete { id } => deleted(service.remove_brand(id)),
    }
}
