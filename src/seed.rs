use sea_orm::DatabaseTransaction;
use tracing::{debug, error, info, warn};

use crate::{catalog::Catalog, db::Db, error::AppResult, models::NewMovie};

#[derive(Clone, Copy, Debug)]
pub struct SeedMovie {
    pub title: &'static str,
    pub slug: &'static str,
    pub poster_url: Option<&'static str>,
    pub overview: &'static str,
    pub clues: [&'static str; 4],
}

impl SeedMovie {
    fn to_new_movie(self) -> NewMovie {
        NewMovie {
            external_id: None,
            title: self.title.to_string(),
            slug: self.slug.to_string(),
            poster_url: self.poster_url.map(str::to_string),
            overview: Some(self.overview.to_string()),
        }
    }
}

/// Slugs touched by one seeding run, in catalog order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: Vec<&'static str>,
    pub skipped: Vec<&'static str>,
}

pub const CATALOG: &[SeedMovie] = &[
    SeedMovie {
        title: "Dune: Part Two",
        slug: "dune-part-two",
        poster_url: None,
        overview: "A young noble seeks revenge and leads a desert rebellion on a distant planet.",
        clues: [
            "A prophecy, a desert planet, and a family torn apart.",
            "The story continues directly from an earlier film released a few years before.",
            "Massive sand creatures and intricate political struggles dominate the screen.",
            "Based on a classic sci-fi novel series centred around a spice that controls the universe.",
        ],
    },
    SeedMovie {
        title: "Inside Out 2",
        slug: "inside-out-2",
        poster_url: None,
        overview: "Emotions inside a teenager’s mind deal with big life changes and new feelings.",
        clues: [
            "The main setting isn’t a city or a planet but inside someone’s head.",
            "Colourful characters each represent a different feeling.",
            "The main human character is growing up and facing new social challenges.",
            "This is a sequel to an animated film where Joy, Sadness, and others run a mind HQ.",
        ],
    },
    SeedMovie {
        title: "Furiosa: A Mad Max Saga",
        slug: "furiosa-mad-max-saga",
        poster_url: None,
        overview: "A young woman fights to survive and escape in a harsh post-apocalyptic wasteland.",
        clues: [
            "The world is a desert wasteland ruled by violent warlords.",
            "Vehicles and car chases play a huge role in the action.",
            "We follow the backstory of a warrior with a missing arm.",
            "It’s a prequel to a 2015 film about a road chase led by an Imperator and a drifter.",
        ],
    },
    SeedMovie {
        title: "Deadpool & Wolverine",
        slug: "deadpool-and-wolverine",
        poster_url: None,
        overview: "Two unlikely heroes team up in a violent, self-aware superhero adventure.",
        clues: [
            "One lead constantly jokes, breaks the fourth wall, and loves chimichangas.",
            "The other lead is grumpy, has claws, and heals very quickly.",
            "The story plays with timelines and references many superhero films.",
            "A red-suited mercenary teams up with a clawed mutant in a foul-mouthed crossover.",
        ],
    },
    SeedMovie {
        title: "Kung Fu Panda 4",
        slug: "kung-fu-panda-4",
        poster_url: None,
        overview: "A martial-arts-loving panda faces a new threat while searching for a successor.",
        clues: [
            "The hero is obsessed with noodles and martial arts.",
            "A group of animal warriors protect a peaceful valley.",
            "The main character struggles with the idea of becoming a spiritual leader.",
            "It’s the fourth film in an animated series about a panda Dragon Warrior.",
        ],
    },
    SeedMovie {
        title: "Ghostbusters: Frozen Empire",
        slug: "ghostbusters-frozen-empire",
        poster_url: None,
        overview: "A team of ghost hunters face an icy supernatural threat in a big city.",
        clues: [
            "Strange equipment includes proton packs and ghost traps.",
            "A familiar firehouse returns as the team’s HQ.",
            "The city faces an unnatural cold linked to spirits.",
            "It’s part of a long-running comedy series where you definitely don’t cross the streams.",
        ],
    },
    SeedMovie {
        title: "Godzilla x Kong: The New Empire",
        slug: "godzilla-x-kong-the-new-empire",
        poster_url: None,
        overview: "Two gigantic creatures confront a new underground threat to their world.",
        clues: [
            "City skylines often end up heavily damaged in these films.",
            "One lead roars and breathes a powerful blue beam.",
            "The other lead is a giant ape with a powerful axe-like weapon.",
            "It’s a team-up in the so-called MonsterVerse featuring a radioactive lizard and a huge gorilla.",
        ],
    },
    SeedMovie {
        title: "Argylle",
        slug: "argylle",
        poster_url: None,
        overview: "An introverted author’s spy stories start to mirror real-world espionage.",
        clues: [
            "The main character writes novels rather than working as a spy—at first.",
            "A cat travels with them in a special backpack.",
            "Fiction and reality blur as secret agents show up in their life.",
            "A stylish action-comedy thriller named after a fictional superspy created by the protagonist.",
        ],
    },
    SeedMovie {
        title: "Wonka",
        slug: "wonka",
        poster_url: None,
        overview: "A young inventor dreams of opening a magical chocolate shop.",
        clues: [
            "The hero is fascinated by chocolate and whimsical inventions.",
            "We see an earlier stage of a character later known for a very famous chocolate factory.",
            "Musical numbers and colourful sets are part of the story.",
            "It’s a prequel about the eccentric chocolatier from Roald Dahl’s classic tale.",
        ],
    },
    SeedMovie {
        title: "The Fall Guy",
        slug: "the-fall-guy",
        poster_url: None,
        overview: "A stuntman gets pulled into a real-life action mystery on a film set.",
        clues: [
            "The protagonist’s day job involves dangerous jumps, crashes, and explosions.",
            "Movie production and behind-the-scenes chaos are central to the plot.",
            "A missing actor turns a film shoot into a real investigation.",
            "It’s an action-comedy about a stuntman who becomes an accidental hero off camera.",
        ],
    },
];

pub async fn seed(db: &Db) -> AppResult<SeedReport> {
    seed_catalog(db, CATALOG).await
}

/// Inserts every catalog movie whose slug is not yet present.
///
/// The whole run shares one session: any failure rolls back every row this
/// run wrote.
pub async fn seed_catalog(db: &Db, catalog: &[SeedMovie]) -> AppResult<SeedReport> {
    let session = db.session().await?;

    let result = seed_into(&session, catalog).await;
    match result {
        Ok(report) => {
            session.commit().await?;
            info!(
                inserted = report.inserted.len(),
                skipped = report.skipped.len(),
                "seeded popular movies and clues"
            );
            Ok(report)
        },
        Err(err) => {
            error!(error = %err, "error while seeding");
            if let Err(rb) = session.rollback().await {
                warn!(error = %rb, "rollback failed");
            }
            Err(err)
        },
    }
}

async fn seed_into(session: &DatabaseTransaction, catalog: &[SeedMovie]) -> AppResult<SeedReport> {
    let store = Catalog::new(session);
    let mut report = SeedReport::default();

    for entry in catalog {
        if store.find_movie_by_slug(entry.slug).await?.is_some() {
            info!(slug = entry.slug, "movie already exists, skipping");
            report.skipped.push(entry.slug);
            continue;
        }

        let movie = store.insert_movie_with_clues(&entry.to_new_movie(), &entry.clues).await?;
        debug!(slug = %movie.slug, id = movie.id, "inserted movie");
        report.inserted.push(entry.slug);
    }

    Ok(report)
}
