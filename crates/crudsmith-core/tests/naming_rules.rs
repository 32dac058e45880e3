//! Public-API checks for identifier derivation and plans.

use crudsmith_core::domain::naming::{IRREGULAR, UNCOUNTABLE};
use crudsmith_core::prelude::*;

#[test]
fn every_casing_of_a_name_agrees() {
    for raw in ["blog post", "blog_post", "blog-post", "BlogPost", "blogPost"] {
        let names = NameSet::derive(raw, Layer::Backend).unwrap();
        assert_eq!(names.studly(), "BlogPost", "studly of {raw}");
        assert_eq!(names.snake(), "blog_post", "snake of {raw}");
        assert_eq!(names.plural_snake(), "blog_posts", "plural of {raw}");

        let again = NameSet::derive(names.studly(), Layer::Backend).unwrap();
        assert_eq!(again.studly(), names.studly());
    }
}

#[test]
fn deriving_from_studly_is_a_fixed_point() {
    let inputs = [
        "post",
        "a_b",
        "ab_c_d",
        "user_a",
        "x",
        "post2",
        "v2_post",
        "V2Post",
        "HTMLParser",
        "UserProfile",
        "order-item",
        "blog post",
        "api_key_v2",
        "person",
    ];

    for raw in inputs {
        let first = NameSet::derive(raw, Layer::Backend).unwrap();
        let again = NameSet::derive(first.studly(), Layer::Backend).unwrap();

        assert_eq!(again.studly(), first.studly(), "studly of {raw}");
        assert_eq!(again.snake(), first.snake(), "snake of {raw}");
        assert_eq!(again.plural_snake(), first.plural_snake(), "plural of {raw}");
        assert!(!first.studly().contains('_'), "studly of {raw}");
        assert!(first.studly().starts_with(|c: char| c.is_ascii_uppercase()));
    }
}

#[test]
fn table_words_pluralize_as_last_segment() {
    for word in UNCOUNTABLE {
        let names = NameSet::derive(&format!("legacy_{word}"), Layer::Backend).unwrap();
        assert_eq!(names.plural_snake(), format!("legacy_{word}"));
    }
    for (singular, plural) in IRREGULAR {
        let names = NameSet::derive(&format!("sales_{singular}"), Layer::Backend).unwrap();
        assert_eq!(names.plural_snake(), format!("sales_{plural}"));
    }
}

#[test]
fn plan_for_frontend_order_item() {
    let names = NameSet::derive("order-item", Layer::Frontend).unwrap();
    let plan = GenerationPlan::new(names, Layer::Frontend, &ProjectLayout::new("/srv/shop"));

    assert_eq!(
        plan.route_line,
        r"Route::resource('order_items', \App\Http\Controllers\Frontend\OrderItemController::class);"
    );
    assert_eq!(
        plan.artifact(ArtifactKind::Repository).unwrap().target_path,
        r"Frontend\OrderItemRepository"
    );
    assert!(plan
        .breadcrumb_file
        .ends_with("routes/breadcrumbs/frontend/order_item.php"));
}

#[test]
fn rejected_names_carry_suggestions() {
    for raw in ["", "   ", "1post", "post!", "po/st"] {
        let err = NameSet::derive(raw, Layer::Backend).unwrap_err();
        assert!(matches!(err, DomainError::InvalidName { .. }), "{raw:?}");
        let err: CrudsmithError = err.into();
        assert_eq!(err.category(), ErrorCategory::Validation);
    }
}
