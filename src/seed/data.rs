//! Fixture collections for the rebuild pipeline. Comments reference their
//! articles by title; the loader resolves titles to generated ids.

pub struct TopicSeed {
    pub slug: &'static str,
    pub description: &'static str,
    pub img_url: &'static str,
}

pub struct UserSeed {
    pub username: &'static str,
    pub name: &'static str,
    pub avatar_url: &'static str,
    pub password: &'static str,
}

pub struct ArticleSeed {
    pub title: &'static str,
    pub topic: &'static str,
    pub author: &'static str,
    pub body: &'static str,
    pub created_at: i64,
    pub votes: i64,
    pub article_img_url: &'static str,
}

pub struct CommentSeed {
    pub body: &'static str,
    pub article_title: &'static str,
    pub author: &'static str,
    pub votes: i64,
    pub created_at: i64,
}

pub struct SeedData {
    pub topics: Vec<TopicSeed>,
    pub users: Vec<UserSeed>,
    pub articles: Vec<ArticleSeed>,
    pub comments: Vec<CommentSeed>,
}

const PLACEHOLDER_IMG_URL: &str =
    "https://images.pexels.com/photos/158651/news-newsletter-newspaper-information-158651.jpeg?w=700&h=700";

pub fn sample_data() -> SeedData {
    SeedData {
        topics: vec![
            TopicSeed {
                slug: "mitch",
                description: "The man, the Mitch, the legend",
                img_url: "",
            },
            TopicSeed {
                slug: "cats",
                description: "Not dogs",
                img_url: "",
            },
            TopicSeed {
                slug: "paper",
                description: "what books are made of",
                img_url: "",
            },
        ],
        users: vec![
            UserSeed {
                username: "butter_bridge",
                name: "jonny",
                avatar_url:
                    "https://www.healthytherapies.com/wp-content/uploads/2016/06/Lime3.jpg",
                password: "butter_password",
            },
            UserSeed {
                username: "icellusedkars",
                name: "sam",
                avatar_url: "https://avatars2.githubusercontent.com/u/24604688?s=460&v=4",
                password: "kars_password",
            },
            UserSeed {
                username: "rogersop",
                name: "paul",
                avatar_url: "https://avatars2.githubusercontent.com/u/24394918?s=400&v=4",
                password: "rogers_password",
            },
            UserSeed {
                username: "lurker",
                name: "do_nothing",
                avatar_url:
                    "https://www.golenbock.com/wp-content/uploads/2015/01/placeholder-user.png",
                password: "lurker_password",
            },
        ],
        articles: vec![
            ArticleSeed {
                title: "Living in the shadow of a great man",
                topic: "mitch",
                author: "butter_bridge",
                body: "I find this existence challenging",
                created_at: 1594329060000,
                votes: 100,
                article_img_url: PLACEHOLDER_IMG_URL,
            },
            ArticleSeed {
                title: "Sony Vaio; or, The Laptop",
                topic: "mitch",
                author: "icellusedkars",
                body: "Call me Mitchell. Some years ago, never mind how long precisely, I thought I would sail about a little and see the watery part of the world.",
                created_at: 1602828180000,
                votes: 0,
                article_img_url: PLACEHOLDER_IMG_URL,
            },
            ArticleSeed {
                title: "Eight pug gifs that remind me of mitch",
                topic: "mitch",
                author: "icellusedkars",
                body: "some gifs",
                created_at: 1604394720000,
                votes: 0,
                article_img_url: PLACEHOLDER_IMG_URL,
            },
            ArticleSeed {
                title: "UNCOVERED: catspiracy to bring down democracy",
                topic: "cats",
                author: "rogersop",
                body: "Bastet walks amongst us, and the cats are taking arms!",
                created_at: 1598176860000,
                votes: 0,
                article_img_url: PLACEHOLDER_IMG_URL,
            },
            ArticleSeed {
                title: "They're not exactly dogs, are they?",
                topic: "mitch",
                author: "butter_bridge",
                body: "Well? Think about it.",
                created_at: 1591438200000,
                votes: 0,
                article_img_url: PLACEHOLDER_IMG_URL,
            },
            ArticleSeed {
                title: "Moustache",
                topic: "mitch",
                author: "butter_bridge",
                body: "Have you seen the size of that thing?",
                created_at: 1602419040000,
                votes: 0,
                article_img_url: PLACEHOLDER_IMG_URL,
            },
            ArticleSeed {
                title: "Another article about Mitch",
                topic: "mitch",
                author: "butter_bridge",
                body: "There will never be enough articles about Mitch!",
                created_at: 1579126860000,
                votes: 0,
                article_img_url: PLACEHOLDER_IMG_URL,
            },
        ],
        comments: vec![
            CommentSeed {
                body: "Oh, I've got compassion running out of my nose, pal! It's only been 52 years, after all.",
                article_title: "They're not exactly dogs, are they?",
                author: "butter_bridge",
                votes: 16,
                created_at: 1586179020000,
            },
            CommentSeed {
                body: "The beautiful thing about treasure is that it exists.",
                article_title: "Living in the shadow of a great man",
                author: "butter_bridge",
                votes: 14,
                created_at: 1604113380000,
            },
            CommentSeed {
                body: "Replacing the quiet elegance of the dark suit and tie with the casual indifference of these muted earth tones is a form of fashion suicide.",
                article_title: "Living in the shadow of a great man",
                author: "icellusedkars",
                votes: 100,
                created_at: 1583025180000,
            },
            CommentSeed {
                body: "I hate streaming noses",
                article_title: "Living in the shadow of a great man",
                author: "icellusedkars",
                votes: 0,
                created_at: 1604437200000,
            },
            CommentSeed {
                body: "git push origin master",
                article_title: "Eight pug gifs that remind me of mitch",
                author: "icellusedkars",
                votes: 0,
                created_at: 1592641440000,
            },
            CommentSeed {
                body: "Fruit pastilles",
                article_title: "Eight pug gifs that remind me of mitch",
                author: "icellusedkars",
                votes: 0,
                created_at: 1592220300000,
            },
            CommentSeed {
                body: "Lobster pot",
                article_title: "Living in the shadow of a great man",
                author: "icellusedkars",
                votes: 0,
                created_at: 1589577540000,
            },
        ],
    }
}
