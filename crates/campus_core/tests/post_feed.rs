use campus_core::{
    CommunityPage, Outbox, PostBody, PostComposer, PostComposerError, PostFeed, PostKind,
    PostSubmission, VoteDirection, POST_TITLE_MAX_CHARS,
};
use chrono::{Duration, TimeZone, Utc};

#[test]
fn feed_seeds_scores_from_snapshot_tallies() {
    let feed = sample_feed();

    assert_eq!(feed.len(), 4);
    assert!(!feed.is_empty());
    assert!(PostFeed::default().is_empty());

    let scores: Vec<i64> = feed
        .items()
        .iter()
        .map(|item| item.vote_state().score())
        .collect();
    assert_eq!(scores, vec![37, 26, 73, 52]);
    assert!(feed
        .items()
        .iter()
        .all(|item| item.vote_state().status().is_none()));
}

#[test]
fn voting_routes_by_post_id_and_items_stay_independent() {
    let mut feed = sample_feed();
    let first = feed.items()[0].post.id;
    let second = feed.items()[1].post.id;

    let updated = feed.vote(first, VoteDirection::Up).unwrap();
    assert_eq!(updated.score(), 38);
    assert_eq!(updated.status(), Some(VoteDirection::Up));

    assert_eq!(feed.item(second).unwrap().vote_state().score(), 26);
    assert_eq!(feed.item(second).unwrap().vote_state().status(), None);

    assert!(feed.vote(uuid::Uuid::new_v4(), VoteDirection::Up).is_none());
}

#[test]
fn community_filter_keeps_feed_order() {
    let feed = sample_feed();

    let cs_items = feed.by_community("computerscience");
    assert_eq!(cs_items.len(), 1);
    assert_eq!(
        cs_items[0].post.title,
        "Campus Connect Hackathon - Join our team!"
    );

    assert!(feed.by_community("marketplace").is_empty());
    assert_eq!(feed.by_community("studygroupa").len(), 1);
}

#[test]
fn card_projections_stay_plain_text() {
    let now = fixed_now();
    let feed = sample_feed();
    let item = &feed.items()[0];

    let preview = item.preview().unwrap();
    assert!(!preview.contains('\n'));
    assert!(preview.starts_with("With finals week approaching"));
    assert!(preview.chars().count() <= 140);

    assert_eq!(item.age_label(now), "2 hours ago");
    assert_eq!(feed.items()[3].age_label(now + Duration::hours(1)), "1 day ago");
}

#[test]
fn community_page_join_toggles_both_ways() {
    let community = campus_core::seed::trending_communities().remove(0);
    let mut page = CommunityPage::new(community);

    assert!(!page.joined());
    assert!(page.toggle_join());
    assert!(!page.toggle_join());
    assert_eq!(page.community().member_count_label(), "1,245 members");
}

#[test]
fn composer_submits_trimmed_submission_and_resets() {
    let picked = campus_core::seed::sample_communities()
        .into_iter()
        .find(|community| community.slug == "computerscience")
        .unwrap();

    let mut composer = PostComposer::new();
    composer.title = "  Hackathon teammates wanted  ".to_string();
    composer.community_slug = Some(picked.slug);
    composer.content = "We need two more people.".to_string();

    let mut outbox = RecordingOutbox::default();
    composer.submit(&mut outbox).unwrap();

    assert_eq!(outbox.posts.len(), 1);
    let sent = &outbox.posts[0];
    assert_eq!(sent.title, "Hackathon teammates wanted");
    assert_eq!(sent.community_slug, "computerscience");
    assert_eq!(sent.body, PostBody::Text("We need two more people.".to_string()));

    // The form is ready for the next post.
    assert_eq!(composer.title, "");
    assert_eq!(composer.community_slug, None);
    assert_eq!(composer.kind, PostKind::Text);
}

#[test]
fn composer_failure_sends_nothing_and_keeps_the_form() {
    let mut composer = PostComposer::new();
    composer.title = "x".repeat(POST_TITLE_MAX_CHARS + 1);
    composer.community_slug = Some("general".to_string());
    composer.content = "body".to_string();

    let mut outbox = RecordingOutbox::default();
    let err = composer.submit(&mut outbox).unwrap_err();

    assert!(matches!(err, PostComposerError::TitleTooLong { .. }));
    assert!(outbox.posts.is_empty());
    assert_eq!(composer.content, "body");
}

#[test]
fn image_and_link_posts_need_their_urls() {
    let mut composer = PostComposer::new();
    composer.title = "Spring festival photos".to_string();
    composer.community_slug = Some("general".to_string());

    composer.kind = PostKind::Image;
    assert!(matches!(
        composer.submission().unwrap_err(),
        PostComposerError::BlankImageUrl
    ));
    composer.image_url = "https://example.edu/festival.jpg".to_string();
    assert!(matches!(
        composer.submission().unwrap().body,
        PostBody::Image(_)
    ));

    composer.kind = PostKind::Link;
    assert!(matches!(
        composer.submission().unwrap_err(),
        PostComposerError::BlankLinkUrl
    ));
    composer.link_url = "https://example.edu/album".to_string();
    assert!(matches!(
        composer.submission().unwrap().body,
        PostBody::Link(_)
    ));
}

fn sample_feed() -> PostFeed {
    PostFeed::new(campus_core::seed::sample_posts(fixed_now()))
}

fn fixed_now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 5, 15, 12, 0, 0).unwrap()
}

#[derive(Default)]
struct RecordingOutbox {
    posts: Vec<PostSubmission>,
}

impl Outbox for RecordingOutbox {
    fn submit_post(&mut self, submission: &PostSubmission) {
        self.posts.push(submission.clone());
    }

    fn submit_comment(&mut self, _post_id: campus_core::PostId, _text: &str) {}

    fn submit_reply(&mut self, _parent_id: campus_core::CommentId, _text: &str) {}
}
