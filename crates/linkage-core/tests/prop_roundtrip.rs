//! Property tests for the serialize → hydrate round trip

mod test_support;

use linkage_core::{read, write};
use proptest::prelude::*;
use serde_json::json;
use test_support::{default_context, register_all, Article, Comment, Person, PublishState};

fn article_strategy() -> impl Strategy<Value = Article> {
    (
        any::<i64>(),
        "[a-zA-Z0-9 ]{0,24}",
        any::<i64>(),
        prop_oneof![Just(PublishState::Draft), Just(PublishState::Published)],
        proptest::option::of((1i64..1_000_000, "[a-z]{0,12}")),
        proptest::collection::vec((any::<i64>(), "[a-z ]{0,16}"), 0..4),
    )
        .prop_map(|(id, title, word_count, state, author, comments)| Article {
            id,
            title,
            word_count,
            state,
            author: author.map(|(id, name)| Person { id, name }),
            comments: comments
                .into_iter()
                .map(|(id, body)| Comment { id, body })
                .collect(),
            meta: json!({}),
        })
}

proptest! {
    #[test]
    fn attributes_survive_the_round_trip(article in article_strategy()) {
        register_all();
        let context = default_context();

        let written = write(&article, &context).unwrap().document;
        let wire = json!({"data": serde_json::to_value(&written).unwrap()});
        let outcome = read::<Article>(&wire, &context).unwrap();

        prop_assert_eq!(&outcome.resource.title, &article.title);
        prop_assert_eq!(outcome.resource.word_count, article.word_count);
        prop_assert_eq!(outcome.resource.state, article.state);
        prop_assert_eq!(
            outcome.resource.author.map(|a| a.id),
            article.author.map(|a| a.id)
        );
    }

    #[test]
    fn document_id_is_always_the_identifier_text(id in any::<i64>()) {
        register_all();
        let article = Article { id, ..Article::default() };
        let document = write(&article, &default_context()).unwrap().document;
        prop_assert_eq!(document.id, id.to_string());
    }
}
