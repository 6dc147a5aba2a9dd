use chrono::{TimeZone, Utc};
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Transaction};

use blogly_core::domain::{NewUser, Post, RECENT_POST_LIMIT, Tag, User};
use blogly_core::error::RepoError;
use blogly_core::ports::{PostRepository, TagRepository, UserRepository};

use crate::database::entity::{post, post_tag, tag, user};
use crate::database::repos::{SeaOrmPostRepository, SeaOrmTagRepository, SeaOrmUserRepository};

fn user_model(id: i32, first: &str, last: &str) -> user::Model {
    user::Model {
        id,
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        image_url: "https://example.com/pic.png".to_owned(),
    }
}

fn post_model(id: i32, user_id: i32, title: &str) -> post::Model {
    post::Model {
        id,
        user_id,
        title: title.to_owned(),
        content: "Content".to_owned(),
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 5, 0).unwrap().into(),
    }
}

#[tokio::test]
async fn find_user_by_id_maps_to_domain() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![user_model(1, "Ada", "Lovelace")]])
        .into_connection();

    let repo = SeaOrmUserRepository::new(db);
    let found = repo.find(1).await.unwrap().unwrap();

    assert_eq!(
        found,
        User {
            id: 1,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            image_url: "https://example.com/pic.png".into(),
        }
    );
}

#[tokio::test]
async fn find_missing_user_is_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<user::Model>::new()])
        .into_connection();

    let repo = SeaOrmUserRepository::new(db);
    assert!(repo.find(999_999).await.unwrap().is_none());
}

#[tokio::test]
async fn insert_user_returns_assigned_id() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![user_model(7, "Ada", "Lovelace")]])
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 7,
            rows_affected: 1,
        }])
        .into_connection();

    let repo = SeaOrmUserRepository::new(db);
    let created = repo
        .insert(NewUser::new("Ada".into(), "Lovelace".into(), None))
        .await
        .unwrap();

    assert_eq!(created.id, 7);
}

#[tokio::test]
async fn delete_missing_user_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = SeaOrmUserRepository::new(db);
    let err = repo.delete(999_999).await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound));
}

#[tokio::test]
async fn recent_posts_map_in_store_order() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![
            post_model(3, 1, "Newest"),
            post_model(2, 1, "Middle"),
            post_model(1, 1, "Oldest"),
        ]])
        .into_connection();

    let repo = SeaOrmPostRepository::new(db);
    let posts = repo.recent(5).await.unwrap();

    let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Newest", "Middle", "Oldest"]);
}

#[tokio::test]
async fn recent_posts_query_orders_newest_first_and_limits() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new()])
        .into_connection();

    let repo = SeaOrmPostRepository::new(db.clone());
    repo.recent(RECENT_POST_LIMIT).await.unwrap();

    assert_eq!(
        db.into_transaction_log(),
        vec![Transaction::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"SELECT "posts"."id", "posts"."user_id", "posts"."title", "posts"."content", "posts"."created_at" FROM "posts" ORDER BY "posts"."created_at" DESC LIMIT $1"#,
            vec![RECENT_POST_LIMIT.into()]
        )],
    );
}

#[tokio::test]
async fn tags_of_post_resolves_join_rows() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![
            post_tag::Model {
                post_id: 1,
                tag_id: 2,
            },
            post_tag::Model {
                post_id: 1,
                tag_id: 5,
            },
        ]])
        .append_query_results(vec![vec![
            tag::Model {
                id: 2,
                name: "rust".to_owned(),
            },
            tag::Model {
                id: 5,
                name: "orm".to_owned(),
            },
        ]])
        .into_connection();

    let repo = SeaOrmPostRepository::new(db);
    let tags = repo.tags_of(1).await.unwrap();

    assert_eq!(
        tags,
        vec![
            Tag {
                id: 2,
                name: "rust".into()
            },
            Tag {
                id: 5,
                name: "orm".into()
            },
        ]
    );
}

#[tokio::test]
async fn tags_of_post_without_links_skips_tag_query() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post_tag::Model>::new()])
        .into_connection();

    let repo = SeaOrmPostRepository::new(db);
    assert!(repo.tags_of(1).await.unwrap().is_empty());
}

#[tokio::test]
async fn update_post_reconciles_tag_links() {
    // Current tags {1, 2}, submission {1, 3}: link 3 added, link 2 deleted.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        // UPDATE .. RETURNING the edited post
        .append_query_results(vec![vec![post_model(1, 1, "Edited")]])
        // current join rows
        .append_query_results(vec![vec![
            post_tag::Model {
                post_id: 1,
                tag_id: 1,
            },
            post_tag::Model {
                post_id: 1,
                tag_id: 2,
            },
        ]])
        // submitted ids resolved against the tags table
        .append_query_results(vec![vec![
            tag::Model {
                id: 1,
                name: "a".to_owned(),
            },
            tag::Model {
                id: 3,
                name: "c".to_owned(),
            },
        ]])
        // insert of the add-set, delete of the remove-set
        .append_exec_results(vec![
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
        ])
        .into_connection();

    let repo = SeaOrmPostRepository::new(db);
    let edited = Post {
        id: 1,
        user_id: 1,
        title: "Edited".into(),
        content: "Content".into(),
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 5, 0).unwrap(),
    };

    let updated = repo.update(edited, &[1, 3]).await.unwrap();
    assert_eq!(updated.title, "Edited");
}

#[tokio::test]
async fn posts_of_tag_resolves_join_rows() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post_tag::Model {
            post_id: 4,
            tag_id: 9,
        }]])
        .append_query_results(vec![vec![post_model(4, 2, "Tagged")]])
        .into_connection();

    let repo = SeaOrmTagRepository::new(db);
    let posts = repo.posts_of(9).await.unwrap();

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, "Tagged");
}
