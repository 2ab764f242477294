use std::sync::Arc;

mod support;

use plaza_core::application::commands::items::CreateItemCommand;
use plaza_core::application::queries::items::{GroupedListingQuery, ListSiblingsQuery};
use plaza_core::domain::content::value_objects::ContentKind;
use plaza_core::infrastructure::repositories::InMemoryContentStore;

use support::{seeded_item, vendor_taxonomy, wire};

#[tokio::test]
async fn created_slugs_resolve_back_to_their_category() {
    let store = Arc::new(InMemoryContentStore::new());
    let services = wire(Arc::clone(&store));
    let taxonomy = vendor_taxonomy();

    for (category_name, title) in [
        ("Landscaping", "Joe's Mowing"),
        ("Home", "Curb Appeal Painting"),
        ("Home Services", "Home Plumbing & Heating"),
        ("Food & Dining", "Corner Café"),
        ("Professional Services", "Peak Accounting"),
    ] {
        let created = services
            .item_commands
            .create_item(
                &taxonomy,
                CreateItemCommand {
                    kind: ContentKind::Vendors,
                    title: title.into(),
                    category_name: category_name.into(),
                    hidden: false,
                },
            )
            .await
            .unwrap();

        let slug = plaza_core::domain::content::value_objects::Slug::new(created.slug).unwrap();
        let resolved = taxonomy.resolve_category(ContentKind::Vendors, &slug);
        assert_eq!(resolved.name(), category_name);
    }
}

#[tokio::test]
async fn grouped_listing_buckets_by_resolved_category() {
    let store = Arc::new(InMemoryContentStore::seeded([
        seeded_item(
            "v1",
            ContentKind::Vendors,
            "Joe's Mowing",
            "Landscaping",
            "vendors-landscaping-joes-mowing",
            Some(0),
        ),
        seeded_item(
            "v2",
            ContentKind::Vendors,
            "Home Plumbing",
            "Home Services",
            "vendors-home-services-plumbing",
            Some(0),
        ),
        // legacy identifier, minted before the namespace tag existed
        seeded_item(
            "v3",
            ContentKind::Vendors,
            "Corner Cafe",
            "Food & Dining",
            "eats-corner-cafe",
            Some(0),
        ),
        // identifier from a taxonomy nobody remembers
        seeded_item(
            "v4",
            ContentKind::Vendors,
            "Mystery Shop",
            "Food & Dining",
            "vendors-mystery-shop",
            Some(0),
        ),
    ]));
    let services = wire(Arc::clone(&store));
    let taxonomy = vendor_taxonomy();

    let groups = services
        .item_queries
        .grouped_listing(
            &taxonomy,
            GroupedListingQuery {
                kind: ContentKind::Vendors,
                include_hidden: true,
            },
        )
        .await
        .unwrap();

    // taxonomy declaration order, Uncategorized appended last
    let names: Vec<&str> = groups.iter().map(|g| g.category.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Landscaping",
            "Home",
            "Home Services",
            "Food & Dining",
            "Professional Services",
            "Uncategorized",
        ]
    );

    let by_name = |name: &str| {
        groups
            .iter()
            .find(|g| g.category.name == name)
            .unwrap()
            .items
            .iter()
            .map(|item| item.id.as_str())
            .collect::<Vec<_>>()
    };
    assert_eq!(by_name("Landscaping"), vec!["v1"]);
    assert_eq!(by_name("Home Services"), vec!["v2"]);
    assert_eq!(by_name("Food & Dining"), vec!["v3"]);
    assert_eq!(by_name("Uncategorized"), vec!["v4"]);
    assert!(by_name("Home").is_empty());
}

#[tokio::test]
async fn hidden_items_are_filtered_from_public_listings_only() {
    let mut hidden = seeded_item(
        "v2",
        ContentKind::Vendors,
        "Night Owl Diner",
        "Food & Dining",
        "vendors-food-dining-night-owl-diner",
        Some(1),
    );
    hidden.is_hidden = true;
    let store = Arc::new(InMemoryContentStore::seeded([
        seeded_item(
            "v1",
            ContentKind::Vendors,
            "Corner Cafe",
            "Food & Dining",
            "vendors-food-dining-corner-cafe",
            Some(0),
        ),
        hidden,
    ]));
    let services = wire(Arc::clone(&store));

    let admin = services
        .item_queries
        .list_siblings(ListSiblingsQuery {
            kind: ContentKind::Vendors,
            category_name: "Food & Dining".into(),
            include_hidden: true,
        })
        .await
        .unwrap();
    let ids: Vec<&str> = admin.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, vec!["v1", "v2"]);

    let public = services
        .item_queries
        .list_siblings(ListSiblingsQuery {
            kind: ContentKind::Vendors,
            category_name: "Food & Dining".into(),
            include_hidden: false,
        })
        .await
        .unwrap();
    let ids: Vec<&str> = public.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, vec!["v1"]);
}

#[tokio::test]
async fn slugs_are_partitioned_by_content_kind() {
    let store = Arc::new(InMemoryContentStore::new());
    let services = wire(Arc::clone(&store));
    // the same category exists for pages and vendors
    let taxonomy = vendor_taxonomy();

    let page = services
        .item_commands
        .create_item(
            &taxonomy,
            CreateItemCommand {
                kind: ContentKind::Pages,
                title: "Joe's Mowing".into(),
                category_name: "Landscaping".into(),
                hidden: false,
            },
        )
        .await
        .unwrap();
    let vendor = services
        .item_commands
        .create_item(
            &taxonomy,
            CreateItemCommand {
                kind: ContentKind::Vendors,
                title: "Joe's Mowing".into(),
                category_name: "Landscaping".into(),
                hidden: false,
            },
        )
        .await
        .unwrap();

    assert_eq!(page.slug, "pages-landscaping-joes-mowing");
    assert_eq!(vendor.slug, "vendors-landscaping-joes-mowing");

    let fetched = services
        .item_queries
        .get_item_by_slug("pages-landscaping-joes-mowing")
        .await
        .unwrap();
    assert_eq!(fetched.id, page.id);
}
