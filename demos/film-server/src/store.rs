//! In-memory state for the demo film server
//!
//! Accounts are fixed; films and sessions live behind one mutex. Film ids
//! are assigned here and never reused within a run.

use chrono::NaiveDate;
use filmlib_core::{EditFilmBody, NewFilmBody, WireFilm};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Cookie carrying the session id.
pub const SESSION_COOKIE: &str = "filmlib.sid";

/// A demo account.
pub struct User {
    pub id: i64,
    pub username: &'static str,
    pub password: &'static str,
    pub name: &'static str,
}

pub const USERS: &[User] = &[
    User {
        id: 1,
        username: "harry",
        password: "pony",
        name: "Harry",
    },
    User {
        id: 2,
        username: "hermione",
        password: "crookshanks",
        name: "Hermione",
    },
];

pub fn user_by_id(id: i64) -> Option<&'static User> {
    USERS.iter().find(|user| user.id == id)
}

#[derive(Clone)]
pub struct Store {
    inner: Arc<Mutex<Inner>>,
}

struct Inner {
    films: HashMap<i64, WireFilm>,
    sessions: HashMap<String, i64>,
    next_id: i64,
}

impl Store {
    /// Create a store pre-populated with a few films per demo account
    pub fn seeded() -> Self {
        let mut films = HashMap::new();
        let seeds = [
            ("Pulp Fiction", true, date(2024, 3, 10), Some(5), 1),
            ("21 Grams", true, date(2024, 3, 17), Some(4), 1),
            ("Star Wars", false, None, None, 1),
            ("Matrix", false, None, Some(3), 1),
            ("Shrek", false, date(2024, 3, 21), Some(3), 2),
        ];

        for (index, (title, favorite, watchdate, rating, user)) in seeds.into_iter().enumerate() {
            let id = index as i64 + 1;
            films.insert(
                id,
                WireFilm {
                    id,
                    title: title.to_string(),
                    favorite,
                    watchdate,
                    rating,
                    user,
                },
            );
        }

        let next_id = films.len() as i64 + 1;
        Self {
            inner: Arc::new(Mutex::new(Inner {
                films,
                sessions: HashMap::new(),
                next_id,
            })),
        }
    }

    pub fn authenticate(&self, username: &str, password: &str) -> Option<&'static User> {
        USERS
            .iter()
            .find(|user| user.username == username && user.password == password)
    }

    pub fn open_session(&self, user: i64) -> String {
        let sid = Uuid::new_v4().to_string();
        self.inner.lock().unwrap().sessions.insert(sid.clone(), user);
        sid
    }

    pub fn close_session(&self, sid: &str) {
        self.inner.lock().unwrap().sessions.remove(sid);
    }

    pub fn session_user(&self, sid: &str) -> Option<i64> {
        self.inner.lock().unwrap().sessions.get(sid).copied()
    }

    /// Films owned by `user`, ordered by id
    pub fn films_of(&self, user: i64) -> Vec<WireFilm> {
        let inner = self.inner.lock().unwrap();
        let mut films: Vec<WireFilm> = inner
            .films
            .values()
            .filter(|film| film.user == user)
            .cloned()
            .collect();
        films.sort_by_key(|film| film.id);
        films
    }

    /// Insert a film for `user` under a freshly assigned id
    ///
    /// The id in the body is the client's bookkeeping value and is
    /// discarded; the server owns identifiers.
    pub fn add(&self, user: i64, body: NewFilmBody) -> i64 {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_id;
        inner.next_id += 1;

        inner.films.insert(
            id,
            WireFilm {
                id,
                title: body.title,
                favorite: body.favorite,
                watchdate: body.watchdate,
                rating: body.rating,
                user,
            },
        );
        id
    }

    /// Replace the editable fields of `user`'s film `id`
    pub fn edit(&self, user: i64, id: i64, body: EditFilmBody) -> bool {
        self.with_film(user, id, |film| {
            film.title = body.title.clone();
            film.favorite = body.favorite;
            film.watchdate = body.date;
            film.rating = body.rating;
        })
    }

    pub fn set_favorite(&self, user: i64, id: i64, favorite: bool) -> bool {
        self.with_film(user, id, |film| film.favorite = favorite)
    }

    pub fn set_rating(&self, user: i64, id: i64, rating: i64) -> bool {
        self.with_film(user, id, |film| film.rating = Some(rating))
    }

    pub fn remove(&self, user: i64, id: i64) -> bool {
        let mut inner = self.inner.lock().unwrap();
        match inner.films.get(&id) {
            Some(film) if film.user == user => {
                inner.films.remove(&id);
                true
            }
            _ => false,
        }
    }

    fn with_film(&self, user: i64, id: i64, apply: impl Fn(&mut WireFilm)) -> bool {
        let mut inner = self.inner.lock().unwrap();
        match inner.films.get_mut(&id) {
            Some(film) if film.user == user => {
                apply(film);
                true
            }
            _ => false,
        }
    }
}

fn date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}
