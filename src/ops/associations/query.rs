//! Read composer
//!
//! Localized, joined projection of associations. The display text lives in
//! the `translation` table keyed by (`group_id`, `lang`); the language is an
//! explicit parameter on every call, never ambient state. The synchronizer
//! reloads through [`AssociationService::get`] after each successful write.

use super::diff::DesiredLinks;
use super::AssociationService;
use crate::common::errors::AssociationError;
use crate::infra::db::entities::{
	association_type, association_unit_type, association_unit_type_service, service, unit_type,
};
use chrono::{DateTime, Utc};
use sea_orm::{
	ColumnTrait, ConnectionTrait, EntityTrait, FromQueryResult, QueryFilter, Statement, Value,
};
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

const PROJECTION_SQL: &str = r#"
	SELECT
		a.id,
		a.name,
		a.association_type_id,
		a.city_id,
		ty.text AS association_type,
		abbr.text || ' "' || a.name || '"' AS type_name,
		city.text AS city_name,
		a.created_at,
		a.updated_at
	FROM association a
	LEFT JOIN association_type aty ON a.association_type_id = aty.id
	LEFT JOIN translation abbr ON abbr.group_id = aty.abbr_id AND abbr.lang = ?
	LEFT JOIN translation ty ON ty.group_id = a.association_type_id AND ty.lang = ?
	LEFT JOIN translation city ON city.group_id = a.city_id AND city.lang = ?
"#;

/// Fully-joined association row with display text resolved for one language.
#[derive(Debug, Clone, FromQueryResult, Serialize)]
pub struct AssociationView {
	pub id: Uuid,
	pub name: String,
	pub association_type_id: Option<Uuid>,
	pub city_id: Option<Uuid>,
	/// Localized association-type text, when the type and translation exist.
	pub association_type: Option<String>,
	/// Display name `<type abbreviation> "<name>"`.
	pub type_name: Option<String>,
	pub city_name: Option<String>,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
}

/// Filter for [`AssociationService::list`].
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
	pub name_contains: Option<String>,
	pub limit: Option<u64>,
	pub offset: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
	pub items: Vec<T>,
	/// Total matching rows, ignoring limit/offset.
	pub total: u64,
}

/// Everything the association edit form needs in one response.
#[derive(Debug, Serialize)]
pub struct FormData {
	pub association_types: Vec<association_type::Model>,
	pub unit_types: Vec<unit_type::Model>,
	pub services: Vec<service::Model>,
	/// Projected view of the requested association; `None` for a blank form,
	/// or when the projection degraded (logged, never fatal).
	pub association: Option<AssociationView>,
	/// The association's current nested links, shaped like the desired state
	/// an update call would submit.
	pub links: Option<DesiredLinks>,
}

impl AssociationService {
	/// Projected view of a single association.
	pub async fn get(
		&self,
		id: Uuid,
		lang: &str,
	) -> Result<Option<AssociationView>, AssociationError> {
		let sql = format!("{PROJECTION_SQL} WHERE a.id = ?");
		let view = AssociationView::find_by_statement(Statement::from_sql_and_values(
			self.db.get_database_backend(),
			sql,
			vec![lang.into(), lang.into(), lang.into(), id.into()],
		))
		.one(&self.db)
		.await?;

		Ok(view)
	}

	/// Projected, paginated listing ordered by name.
	pub async fn list(
		&self,
		filter: &ListFilter,
		lang: &str,
	) -> Result<Paginated<AssociationView>, AssociationError> {
		let mut sql = PROJECTION_SQL.to_owned();
		let mut values: Vec<Value> = vec![lang.into(), lang.into(), lang.into()];
		let mut count_sql = "SELECT COUNT(*) AS total FROM association a".to_owned();
		let mut count_values: Vec<Value> = Vec::new();

		if let Some(name) = &filter.name_contains {
			let pattern = format!("%{name}%");
			sql.push_str(" WHERE a.name LIKE ?");
			count_sql.push_str(" WHERE a.name LIKE ?");
			values.push(pattern.clone().into());
			count_values.push(pattern.into());
		}

		sql.push_str(" ORDER BY a.name");
		if let Some(limit) = filter.limit {
			sql.push_str(" LIMIT ? OFFSET ?");
			values.push((limit as i64).into());
			values.push((filter.offset.unwrap_or(0) as i64).into());
		}

		let backend = self.db.get_database_backend();
		let items = AssociationView::find_by_statement(Statement::from_sql_and_values(
			backend, sql, values,
		))
		.all(&self.db)
		.await?;

		#[derive(FromQueryResult)]
		struct CountRow {
			total: i64,
		}

		let total = CountRow::find_by_statement(Statement::from_sql_and_values(
			backend,
			count_sql,
			count_values,
		))
		.one(&self.db)
		.await?
		.map(|row| row.total.max(0) as u64)
		.unwrap_or(0);

		Ok(Paginated { items, total })
	}

	/// The association's persisted link graph, shaped as a desired state:
	/// unit type id → attached service ids.
	pub async fn current_links(
		&self,
		association_id: Uuid,
	) -> Result<DesiredLinks, AssociationError> {
		let links = association_unit_type::Entity::find()
			.filter(association_unit_type::Column::AssociationId.eq(association_id))
			.all(&self.db)
			.await?;

		let mut out = DesiredLinks::new();
		for link in links {
			let service_ids = association_unit_type_service::Entity::find()
				.filter(
					association_unit_type_service::Column::AssociationUnitTypeId.eq(link.id),
				)
				.all(&self.db)
				.await?
				.into_iter()
				.map(|row| row.service_id)
				.collect();
			out.insert(link.unit_type_id, service_ids);
		}

		Ok(out)
	}

	/// Lookup lists for the edit form, plus — when `id` is given — the
	/// association's current links and projected view.
	///
	/// The projection of an existing association is enrichment on top of the
	/// already-resolved link map: if it fails it is logged and the field
	/// stays `None` rather than failing the whole call.
	pub async fn form_data(
		&self,
		id: Option<Uuid>,
		lang: &str,
	) -> Result<FormData, AssociationError> {
		let association_types = association_type::Entity::find().all(&self.db).await?;
		let unit_types = unit_type::Entity::find().all(&self.db).await?;
		let services = service::Entity::find().all(&self.db).await?;

		let mut data = FormData {
			association_types,
			unit_types,
			services,
			association: None,
			links: None,
		};

		if let Some(id) = id {
			data.links = Some(self.current_links(id).await?);
			match self.get(id, lang).await {
				Ok(view) => data.association = view,
				Err(err) => {
					warn!(
						association_id = %id,
						error = %err,
						"association projection failed, returning form data without it"
					);
				}
			}
		}

		Ok(data)
	}
}
