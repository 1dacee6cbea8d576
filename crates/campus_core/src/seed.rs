//! Snapshot content for a demo session.
//!
//! # Responsibility
//! - Provide the posts, comments, events and communities shown before a
//!   real backend exists.
//!
//! # Invariants
//! - Builders are deterministic given `now`; ids are fresh per call.
//! - Tallies and timestamps here are the seed values vote state grows from.

use crate::model::event::Event;
use crate::model::post::{Comment, Community, Post};
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

/// The May 2023 campus events.
pub fn sample_events() -> Vec<Event> {
    vec![
        Event {
            id: Uuid::new_v4(),
            title: "End of Semester Party".to_string(),
            date: date(2023, 5, 15),
            start_time: time(20, 0),
            end_time: time(23, 0),
            location: "Student Center, Main Hall".to_string(),
            description: "Join us for the end of semester celebration! There will be food, \
                          music, and games. All students are welcome!"
                .to_string(),
        },
        Event {
            id: Uuid::new_v4(),
            title: "Career Fair".to_string(),
            date: date(2023, 5, 20),
            start_time: time(10, 0),
            end_time: time(16, 0),
            location: "Engineering Building".to_string(),
            description: "Connect with potential employers from various industries. Bring \
                          your resume and dress professionally."
                .to_string(),
        },
        Event {
            id: Uuid::new_v4(),
            title: "Study Group - Finals Prep".to_string(),
            date: date(2023, 5, 10),
            start_time: time(14, 0),
            end_time: time(17, 0),
            location: "Library, Room 204".to_string(),
            description: "Join our study group to prepare for final exams. We'll be covering \
                          key topics from the semester."
                .to_string(),
        },
    ]
}

/// The home feed posts, aged relative to `now`.
pub fn sample_posts(now: DateTime<Utc>) -> Vec<Post> {
    vec![
        Post {
            id: Uuid::new_v4(),
            title: "Tips for acing your finals this semester".to_string(),
            content: "With finals week approaching, I wanted to share some study strategies \
                      that have helped me maintain a 4.0 GPA. First, start early and create \
                      a study schedule. Break down your material into manageable chunks and \
                      use active recall techniques instead of passive reading..."
                .to_string(),
            community_name: "StudyGroupA".to_string(),
            community_slug: "studygroupa".to_string(),
            author: "Academic Ace".to_string(),
            author_username: "academic_ace".to_string(),
            created_at: now - Duration::hours(2),
            upvotes: 42,
            downvotes: 5,
            comment_count: 15,
            has_image: false,
        },
        Post {
            id: Uuid::new_v4(),
            title: "Campus Connect Hackathon - Join our team!".to_string(),
            content: "Hey everyone! The annual Campus Connect Hackathon is coming up next \
                      month, and I'm looking for team members. We'll be building a \
                      sustainability app that helps students reduce their carbon footprint \
                      on campus. Looking for developers, designers, and anyone passionate \
                      about environmental issues!"
                .to_string(),
            community_name: "ComputerScience".to_string(),
            community_slug: "computerscience".to_string(),
            author: "Code Master".to_string(),
            author_username: "code_master".to_string(),
            created_at: now - Duration::hours(5),
            upvotes: 28,
            downvotes: 2,
            comment_count: 7,
            has_image: true,
        },
        Post {
            id: Uuid::new_v4(),
            title: "Photos from yesterday's campus event".to_string(),
            content: "Had an amazing time at the Spring Festival yesterday! Here are some \
                      photos I took of the performances, food stalls, and activities. It was \
                      great seeing so many students come together and celebrate. Looking \
                      forward to next year's event!"
                .to_string(),
            community_name: "General".to_string(),
            community_slug: "general".to_string(),
            author: "Event Enthusiast".to_string(),
            author_username: "event_enthusiast".to_string(),
            created_at: now - Duration::hours(24),
            upvotes: 76,
            downvotes: 3,
            comment_count: 23,
            has_image: true,
        },
        Post {
            id: Uuid::new_v4(),
            title: "Professor Johnson's class is killing me".to_string(),
            content: "Is anyone else struggling with Professor Johnson's Advanced Calculus \
                      class? The homework assignments are taking me 10+ hours each week, and \
                      I still don't feel like I understand the material. Any tips or study \
                      resources would be greatly appreciated!"
                .to_string(),
            community_name: "Engineering".to_string(),
            community_slug: "engineering".to_string(),
            author: "Struggling Student".to_string(),
            author_username: "struggling_student".to_string(),
            created_at: now - Duration::hours(36),
            upvotes: 54,
            downvotes: 2,
            comment_count: 31,
            has_image: false,
        },
    ]
}

/// The discussion under the finals-tips post, aged relative to `now`.
pub fn sample_comments(now: DateTime<Utc>) -> Vec<Comment> {
    vec![
        Comment {
            id: Uuid::new_v4(),
            author: "Study Buddy".to_string(),
            author_username: "study_buddy".to_string(),
            content: "These are great tips! I especially like the point about teaching \
                      concepts to others. I've found that explaining something to someone \
                      else really helps solidify my understanding."
                .to_string(),
            created_at: now - Duration::hours(1),
            upvotes: 15,
            downvotes: 1,
            replies: vec![Comment {
                id: Uuid::new_v4(),
                author: "Learning Pro".to_string(),
                author_username: "learning_pro".to_string(),
                content: "Agreed! The Feynman Technique (teaching to learn) is one of the \
                          most effective study methods out there."
                    .to_string(),
                created_at: now - Duration::minutes(30),
                upvotes: 8,
                downvotes: 0,
                replies: Vec::new(),
            }],
        },
        Comment {
            id: Uuid::new_v4(),
            author: "Education Expert".to_string(),
            author_username: "education_expert".to_string(),
            content: "I would add that it's also important to understand your learning \
                      style. Some people are visual learners, others are auditory or \
                      kinesthetic. Tailoring your study methods to your learning style can \
                      make a big difference."
                .to_string(),
            created_at: now - Duration::hours(2),
            upvotes: 12,
            downvotes: 2,
            replies: Vec::new(),
        },
        Comment {
            id: Uuid::new_v4(),
            author: "Tech Student".to_string(),
            author_username: "tech_student".to_string(),
            content: "What about study apps or tools? Any recommendations for digital \
                      flashcards or note-taking apps?"
                .to_string(),
            created_at: now - Duration::hours(3),
            upvotes: 7,
            downvotes: 0,
            replies: vec![
                Comment {
                    id: Uuid::new_v4(),
                    author: "App Enthusiast".to_string(),
                    author_username: "app_enthusiast".to_string(),
                    content: "I personally love Anki for flashcards and Notion for \
                              note-taking. Anki uses spaced repetition which is \
                              scientifically proven to improve retention."
                        .to_string(),
                    created_at: now - Duration::minutes(150),
                    upvotes: 5,
                    downvotes: 0,
                    replies: Vec::new(),
                },
                Comment {
                    id: Uuid::new_v4(),
                    author: "Focus Master".to_string(),
                    author_username: "focus_master".to_string(),
                    content: "Don't forget about Forest app for staying focused! It helps \
                              you avoid phone distractions during study sessions."
                        .to_string(),
                    created_at: now - Duration::hours(2),
                    upvotes: 4,
                    downvotes: 0,
                    replies: Vec::new(),
                },
            ],
        },
    ]
}

/// Communities surfaced in the trending sidebar.
pub fn trending_communities() -> Vec<Community> {
    vec![
        community(
            "StudyGroupA",
            "studygroupa",
            "A community for students to find study partners and share resources",
            1245,
        ),
        community(
            "ComputerScience",
            "computerscience",
            "Discussions about CS courses, projects, and career advice",
            3782,
        ),
        community(
            "CampusEvents",
            "campusevents",
            "Stay updated on all events happening around campus",
            2150,
        ),
        community(
            "Marketplace",
            "marketplace",
            "Buy, sell, or trade textbooks and other student essentials",
            1876,
        ),
    ]
}

/// Communities offered by the create-post picker.
pub fn sample_communities() -> Vec<Community> {
    vec![
        community(
            "General",
            "general",
            "Campus-wide conversations that fit nowhere else",
            5214,
        ),
        community(
            "Study Group A",
            "studygroupa",
            "A community for students to find study partners and share resources",
            1245,
        ),
        community(
            "Computer Science",
            "computerscience",
            "Discussions about CS courses, projects, and career advice",
            3782,
        ),
        community(
            "Engineering",
            "engineering",
            "Courses, labs, internships and projects across engineering",
            2934,
        ),
        community(
            "Arts",
            "arts",
            "Exhibitions, performances and creative work around campus",
            987,
        ),
    ]
}

fn community(name: &str, slug: &str, description: &str, member_count: u32) -> Community {
    Community {
        name: name.to_string(),
        slug: slug.to_string(),
        description: description.to_string(),
        member_count,
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed dates are valid")
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("seed times are valid")
}
