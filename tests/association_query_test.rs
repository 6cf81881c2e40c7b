//! Read-composer behavior: localized projection with an explicit language,
//! pagination, and the combined form-data response.

mod helpers;

use helpers::{
	links, normalize, seed_association_type, seed_service, seed_translation, seed_unit_type, setup,
};
use hoa_core::ops::associations::{AssociationInput, ListFilter};
use hoa_core::AssociationService;
use uuid::Uuid;

fn input(name: &str, type_id: Option<Uuid>, city_id: Option<Uuid>) -> AssociationInput {
	AssociationInput {
		name: name.to_owned(),
		association_type_id: type_id,
		city_id,
	}
}

#[tokio::test]
async fn projection_resolves_display_text_per_language() {
	let db = setup().await;
	let svc = AssociationService::new(db.conn.clone());

	let abbr_id = Uuid::new_v4();
	let city_id = Uuid::new_v4();
	let type_id = seed_association_type(&db.conn, Some(abbr_id)).await;

	seed_translation(&db.conn, abbr_id, "en", "HOA").await;
	seed_translation(&db.conn, abbr_id, "uk", "ОСББ").await;
	seed_translation(&db.conn, type_id, "en", "Homeowners association").await;
	seed_translation(&db.conn, type_id, "uk", "Об'єднання співвласників").await;
	seed_translation(&db.conn, city_id, "en", "Kyiv").await;

	let view = svc
		.create(input("Sunrise", Some(type_id), Some(city_id)), &links(&[]), "en")
		.await
		.unwrap();

	assert_eq!(view.type_name.as_deref(), Some(r#"HOA "Sunrise""#));
	assert_eq!(view.association_type.as_deref(), Some("Homeowners association"));
	assert_eq!(view.city_name.as_deref(), Some("Kyiv"));

	let view_uk = svc.get(view.id, "uk").await.unwrap().unwrap();
	assert_eq!(view_uk.type_name.as_deref(), Some(r#"ОСББ "Sunrise""#));
	assert_eq!(view_uk.association_type.as_deref(), Some("Об'єднання співвласників"));
	// No Ukrainian city translation seeded.
	assert_eq!(view_uk.city_name, None);
}

#[tokio::test]
async fn projection_degrades_to_none_without_translations() {
	let db = setup().await;
	let svc = AssociationService::new(db.conn.clone());

	let view = svc.create(input("Plain", None, None), &links(&[]), "en").await.unwrap();

	assert_eq!(view.name, "Plain");
	assert_eq!(view.association_type, None);
	assert_eq!(view.type_name, None);
	assert_eq!(view.city_name, None);
}

#[tokio::test]
async fn list_paginates_and_counts_the_filtered_set() {
	let db = setup().await;
	let svc = AssociationService::new(db.conn.clone());

	for name in ["Alpha", "Beta", "Gamma"] {
		svc.create(input(name, None, None), &links(&[]), "en").await.unwrap();
	}

	let page = svc
		.list(
			&ListFilter {
				limit: Some(2),
				..Default::default()
			},
			"en",
		)
		.await
		.unwrap();
	assert_eq!(page.items.len(), 2);
	assert_eq!(page.total, 3);
	assert_eq!(page.items[0].name, "Alpha");

	let rest = svc
		.list(
			&ListFilter {
				limit: Some(2),
				offset: Some(2),
				..Default::default()
			},
			"en",
		)
		.await
		.unwrap();
	assert_eq!(rest.items.len(), 1);
	assert_eq!(rest.items[0].name, "Gamma");

	let filtered = svc
		.list(
			&ListFilter {
				name_contains: Some("et".to_owned()),
				..Default::default()
			},
			"en",
		)
		.await
		.unwrap();
	assert_eq!(filtered.total, 1);
	assert_eq!(filtered.items[0].name, "Beta");
}

#[tokio::test]
async fn form_data_bundles_lookups_and_current_links() {
	let db = setup().await;
	let svc = AssociationService::new(db.conn.clone());

	let type_id = seed_association_type(&db.conn, None).await;
	let ut1 = seed_unit_type(&db.conn).await;
	let ut2 = seed_unit_type(&db.conn).await;
	let (s1, s2) = (seed_service(&db.conn).await, seed_service(&db.conn).await);

	let desired = links(&[(ut1, &[s1, s2]), (ut2, &[s2])]);
	let view = svc
		.create(input("Sunrise", Some(type_id), None), &desired, "en")
		.await
		.unwrap();

	let blank = svc.form_data(None, "en").await.unwrap();
	assert_eq!(blank.association_types.len(), 1);
	assert_eq!(blank.unit_types.len(), 2);
	assert_eq!(blank.services.len(), 2);
	assert!(blank.association.is_none());
	assert!(blank.links.is_none());

	let form = svc.form_data(Some(view.id), "en").await.unwrap();
	assert_eq!(form.association.as_ref().map(|a| a.id), Some(view.id));
	assert_eq!(normalize(form.links.as_ref().unwrap()), normalize(&desired));
}
