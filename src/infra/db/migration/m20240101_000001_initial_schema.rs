//! Initial schema
//!
//! Creates the association tables, the two junction tables of the nested
//! link graph, the building usage table, and the translation lookup.
//! Foreign keys are plain references — no database cascade; the engine
//! deletes children before parents itself.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
	async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
		manager
			.create_table(
				Table::create()
					.table(Translation::Table)
					.if_not_exists()
					.col(ColumnDef::new(Translation::Id).uuid().not_null().primary_key())
					.col(ColumnDef::new(Translation::GroupId).uuid().not_null())
					.col(ColumnDef::new(Translation::Lang).string().not_null())
					.col(ColumnDef::new(Translation::Text).string().not_null())
					.to_owned(),
			)
			.await?;

		manager
			.create_index(
				Index::create()
					.name("idx_translation_group_lang")
					.table(Translation::Table)
					.col(Translation::GroupId)
					.col(Translation::Lang)
					.unique()
					.to_owned(),
			)
			.await?;

		manager
			.create_table(
				Table::create()
					.table(AssociationType::Table)
					.if_not_exists()
					.col(ColumnDef::new(AssociationType::Id).uuid().not_null().primary_key())
					.col(ColumnDef::new(AssociationType::AbbrId).uuid())
					.col(
						ColumnDef::new(AssociationType::CreatedAt)
							.timestamp()
							.not_null()
							.default(Expr::current_timestamp()),
					)
					.to_owned(),
			)
			.await?;

		manager
			.create_table(
				Table::create()
					.table(UnitType::Table)
					.if_not_exists()
					.col(ColumnDef::new(UnitType::Id).uuid().not_null().primary_key())
					.col(
						ColumnDef::new(UnitType::CreatedAt)
							.timestamp()
							.not_null()
							.default(Expr::current_timestamp()),
					)
					.to_owned(),
			)
			.await?;

		manager
			.create_table(
				Table::create()
					.table(Service::Table)
					.if_not_exists()
					.col(ColumnDef::new(Service::Id).uuid().not_null().primary_key())
					.col(
						ColumnDef::new(Service::CreatedAt)
							.timestamp()
							.not_null()
							.default(Expr::current_timestamp()),
					)
					.to_owned(),
			)
			.await?;

		manager
			.create_table(
				Table::create()
					.table(Association::Table)
					.if_not_exists()
					.col(ColumnDef::new(Association::Id).uuid().not_null().primary_key())
					.col(ColumnDef::new(Association::Name).string().not_null())
					.col(ColumnDef::new(Association::AssociationTypeId).uuid())
					.col(ColumnDef::new(Association::CityId).uuid())
					.col(
						ColumnDef::new(Association::CreatedAt)
							.timestamp()
							.not_null()
							.default(Expr::current_timestamp()),
					)
					.col(
						ColumnDef::new(Association::UpdatedAt)
							.timestamp()
							.not_null()
							.default(Expr::current_timestamp()),
					)
					.foreign_key(
						ForeignKey::create()
							.name("fk_association_type")
							.from(Association::Table, Association::AssociationTypeId)
							.to(AssociationType::Table, AssociationType::Id),
					)
					.to_owned(),
			)
			.await?;

		manager
			.create_table(
				Table::create()
					.table(AssociationUnitType::Table)
					.if_not_exists()
					.col(ColumnDef::new(AssociationUnitType::Id).uuid().not_null().primary_key())
					.col(ColumnDef::new(AssociationUnitType::AssociationId).uuid().not_null())
					.col(ColumnDef::new(AssociationUnitType::UnitTypeId).uuid().not_null())
					.col(
						ColumnDef::new(AssociationUnitType::CreatedAt)
							.timestamp()
							.not_null()
							.default(Expr::current_timestamp()),
					)
					.foreign_key(
						ForeignKey::create()
							.name("fk_association_unit_type_association")
							.from(AssociationUnitType::Table, AssociationUnitType::AssociationId)
							.to(Association::Table, Association::Id),
					)
					.foreign_key(
						ForeignKey::create()
							.name("fk_association_unit_type_unit_type")
							.from(AssociationUnitType::Table, AssociationUnitType::UnitTypeId)
							.to(UnitType::Table, UnitType::Id),
					)
					.to_owned(),
			)
			.await?;

		manager
			.create_index(
				Index::create()
					.name("idx_association_unit_type_unique")
					.table(AssociationUnitType::Table)
					.col(AssociationUnitType::AssociationId)
					.col(AssociationUnitType::UnitTypeId)
					.unique()
					.to_owned(),
			)
			.await?;

		manager
			.create_table(
				Table::create()
					.table(AssociationUnitTypeService::Table)
					.if_not_exists()
					.col(
						ColumnDef::new(AssociationUnitTypeService::Id)
							.uuid()
							.not_null()
							.primary_key(),
					)
					.col(
						ColumnDef::new(AssociationUnitTypeService::AssociationUnitTypeId)
							.uuid()
							.not_null(),
					)
					.col(ColumnDef::new(AssociationUnitTypeService::ServiceId).uuid().not_null())
					.col(
						ColumnDef::new(AssociationUnitTypeService::CreatedAt)
							.timestamp()
							.not_null()
							.default(Expr::current_timestamp()),
					)
					.foreign_key(
						ForeignKey::create()
							.name("fk_association_unit_type_service_link")
							.from(
								AssociationUnitTypeService::Table,
								AssociationUnitTypeService::AssociationUnitTypeId,
							)
							.to(AssociationUnitType::Table, AssociationUnitType::Id),
					)
					.foreign_key(
						ForeignKey::create()
							.name("fk_association_unit_type_service_service")
							.from(
								AssociationUnitTypeService::Table,
								AssociationUnitTypeService::ServiceId,
							)
							.to(Service::Table, Service::Id),
					)
					.to_owned(),
			)
			.await?;

		manager
			.create_index(
				Index::create()
					.name("idx_association_unit_type_service_unique")
					.table(AssociationUnitTypeService::Table)
					.col(AssociationUnitTypeService::AssociationUnitTypeId)
					.col(AssociationUnitTypeService::ServiceId)
					.unique()
					.to_owned(),
			)
			.await?;

		manager
			.create_table(
				Table::create()
					.table(Building::Table)
					.if_not_exists()
					.col(ColumnDef::new(Building::Id).uuid().not_null().primary_key())
					.col(ColumnDef::new(Building::AssociationId).uuid().not_null())
					.col(ColumnDef::new(Building::Name).string().not_null())
					.col(
						ColumnDef::new(Building::CreatedAt)
							.timestamp()
							.not_null()
							.default(Expr::current_timestamp()),
					)
					.foreign_key(
						ForeignKey::create()
							.name("fk_building_association")
							.from(Building::Table, Building::AssociationId)
							.to(Association::Table, Association::Id),
					)
					.to_owned(),
			)
			.await?;

		Ok(())
	}

	async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
		manager
			.drop_table(Table::drop().table(Building::Table).to_owned())
			.await?;
		manager
			.drop_table(Table::drop().table(AssociationUnitTypeService::Table).to_owned())
			.await?;
		manager
			.drop_table(Table::drop().table(AssociationUnitType::Table).to_owned())
			.await?;
		manager
			.drop_table(Table::drop().table(Association::Table).to_owned())
			.await?;
		manager
			.drop_table(Table::drop().table(Service::Table).to_owned())
			.await?;
		manager
			.drop_table(Table::drop().table(UnitType::Table).to_owned())
			.await?;
		manager
			.drop_table(Table::drop().table(AssociationType::Table).to_owned())
			.await?;
		manager
			.drop_table(Table::drop().table(Translation::Table).to_owned())
			.await?;

		Ok(())
	}
}

#[derive(DeriveIden)]
enum Association {
	Table,
	Id,
	Name,
	AssociationTypeId,
	CityId,
	CreatedAt,
	UpdatedAt,
}

#[derive(DeriveIden)]
enum AssociationType {
	Table,
	Id,
	AbbrId,
	CreatedAt,
}

#[derive(DeriveIden)]
enum UnitType {
	Table,
	Id,
	CreatedAt,
}

#[derive(DeriveIden)]
enum Service {
	Table,
	Id,
	CreatedAt,
}

#[derive(DeriveIden)]
enum AssociationUnitType {
	Table,
	Id,
	AssociationId,
	UnitTypeId,
	CreatedAt,
}

#[derive(DeriveIden)]
enum AssociationUnitTypeService {
	Table,
	Id,
	AssociationUnitTypeId,
	ServiceId,
	CreatedAt,
}

#[derive(DeriveIden)]
enum Building {
	Table,
	Id,
	AssociationId,
	Name,
	CreatedAt,
}

#[derive(DeriveIden)]
enum Translation {
	Table,
	Id,
	GroupId,
	Lang,
	Text,
}
