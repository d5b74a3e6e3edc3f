use shepherd_core::models::InsightKind;

pub(crate) const INSIGHTS: [(InsightKind, &str, &str); 5] = [
    (
        InsightKind::Theological,
        "God's Faithfulness",
        "Scripture consistently reveals God as faithful to His promises. Reading this passage \
         with that in mind helps us see how it fits within the larger story of redemption.",
    ),
    (
        InsightKind::Historical,
        "Reading in Context",
        "Every passage was first written to real people in a particular time and place. \
         Considering the original audience helps us understand what the author meant before \
         asking what it means for us today.",
    ),
    (
        InsightKind::Practical,
        "Living It Out",
        "Consider one concrete way this passage could shape how you speak, act, or pray this week.",
    ),
    (
        InsightKind::Devotional,
        "Drawing Near",
        "Take a moment to read the passage slowly and prayerfully, asking the Lord to open your \
         heart to what He is saying.",
    ),
    (
        InsightKind::Linguistic,
        "Words Worth Studying",
        "The original Hebrew and Greek words often carry shades of meaning that translations \
         cannot fully capture. A good study Bible or lexicon can help you explore them.",
    ),
];

pub(crate) const DEVOTION_TITLE: &str = "Resting in God's Word";

pub(crate) const DEVOTION_BODY: &str =
    "God speaks through His Word, and He is faithful to meet those who seek Him. As you read \
     this passage, pause and consider what it reveals about His character and His care for you.";

pub(crate) const DEVOTION_PRAYER: &str =
    "Lord, thank You for Your Word. Open my eyes to see You more clearly and help me to trust \
     You today. Amen.";

pub(crate) const REFLECTION_QUESTIONS: [&str; 2] = [
    "What does this passage reveal about God's character?",
    "How might you respond to this passage today?",
];

pub(crate) const EXPLANATION: &str =
    "This passage is best understood within its surrounding chapter and the wider witness of \
     Scripture. Reading it alongside its context, and comparing it with trusted commentaries, \
     will help clarify its meaning.";

pub(crate) const RECOMMENDATIONS: [&str; 3] = [
    "Compare several reputable translations side by side.",
    "Consult a study Bible for notes on translation choices.",
    "Read the surrounding verses to understand the context.",
];

pub(crate) const HISTORICAL_PERIOD: &str = "Ancient Near East and Greco-Roman world";

pub(crate) const HISTORICAL_SUMMARY: &str =
    "The books of the Bible were written over many centuries in a variety of historical \
     settings. Understanding the setting of this passage can deepen appreciation for its message.";

pub(crate) const HISTORICAL_BACKGROUND: &str =
    "Family, covenant, and community shaped daily life and worship in biblical times.";

pub(crate) const FREEFORM: &str =
    "We weren't able to prepare that content just now. In the meantime, consider spending a few \
     quiet minutes reading and reflecting on a favorite passage of Scripture.";
