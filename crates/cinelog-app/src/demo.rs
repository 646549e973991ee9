//! Seed flow: exercises every domain service once so a fresh process has
//! activity on each topic.

use chrono::{Duration, Utc};
use cinelog_core::error::DomainError;
use cinelog_movies::{CastMember, NewMovie};

use crate::bootstrap::Services;

fn seed_movies() -> Vec<NewMovie> {
    vec![
        NewMovie {
            title: "The Shawshank Redemption".to_owned(),
            year: 1994,
            genre: vec!["Drama".to_owned()],
            director: vec!["Frank Darabont".to_owned()],
            description:
                "Two imprisoned men bond over years, finding solace and redemption through common decency."
                    .to_owned(),
            duration_minutes: Some(142),
            cast: vec![
                CastMember {
                    name: "Tim Robbins".to_owned(),
                    character: "Andy Dufresne".to_owned(),
                },
                CastMember {
                    name: "Morgan Freeman".to_owned(),
                    character: "Ellis Redding".to_owned(),
                },
            ],
        },
        NewMovie {
            title: "The Godfather".to_owned(),
            year: 1972,
            genre: vec!["Crime".to_owned(), "Drama".to_owned()],
            director: vec!["Francis Ford Coppola".to_owned()],
            description:
                "The aging patriarch of a crime dynasty transfers control to his reluctant son."
                    .to_owned(),
            duration_minutes: Some(175),
            cast: vec![
                CastMember {
                    name: "Marlon Brando".to_owned(),
                    character: "Don Vito Corleone".to_owned(),
                },
                CastMember {
                    name: "Al Pacino".to_owned(),
                    character: "Michael Corleone".to_owned(),
                },
            ],
        },
    ]
}

/// Run the whole seed flow: users, movies, watchlist, watches, ratings, and
/// a profile update. Publishes on every topic the registry knows.
///
/// # Errors
///
/// Propagates the first `DomainError` from any service call.
pub async fn run(services: &Services) -> Result<(), DomainError> {
    tracing::info!("seeding demo data");

    let fan = services.users.register_user("moviefan", "fan@example.com").await?;
    let cinephile = services
        .users
        .register_user("cinephile", "cinephile@example.com")
        .await?;
    tracing::info!(count = services.users.list_users().await?.len(), "users registered");

    let mut created = Vec::new();
    for new in seed_movies() {
        created.push(services.movies.create_movie(new).await?);
    }

    for movie in &created {
        services.watchlist.add_movie(&fan.id, movie).await?;
    }
    tracing::info!(
        user_id = %fan.id,
        count = services.watchlist.watchlist(&fan.id).await?.len(),
        "watchlist filled"
    );

    for (i, movie) in created.iter().enumerate() {
        let watched_at = Utc::now() - Duration::days(i as i64 + 1);
        services
            .library
            .mark_watched(&fan.id, &movie.id, &movie.title, watched_at, movie.duration_minutes)
            .await?;
    }

    let reviews = [
        "Absolutely incredible! One of the best films ever made.",
        "A masterpiece of cinema. Perfect storytelling and acting.",
    ];
    for (movie, (score, review)) in created.iter().zip([4.8, 4.9].into_iter().zip(reviews)) {
        services
            .ratings
            .rate_movie(&fan.id, &movie.id, &movie.title, score, Some(review.to_owned()))
            .await?;
    }

    services
        .users
        .update_user(&fan.id, "moviefan_updated", &fan.email)
        .await?;
    tracing::info!(user_id = %cinephile.id, "demo data seeded");
    Ok(())
}
