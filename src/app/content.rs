//! Static page content: projects, videos, skills, and contact data.
//!
//! Everything here is compile-time literal data; the only logic is the
//! filtering and selection used by the gallery and the project modal.

pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub tags: &'static [&'static str],
    pub mockup: &'static str,
    pub live_url: Option<&'static str>,
    pub github_url: Option<&'static str>,
    pub color: &'static str,
    pub challenges: &'static [&'static str],
    pub solutions: &'static [&'static str],
    pub features: &'static [&'static str],
    pub tech_stack: &'static [(&'static str, &'static [&'static str])],
}

/// Project at `index`, or `None` for anything out of range. The UI only ever
/// passes valid indices; this is the defensive edge.
pub fn project(index: usize) -> Option<&'static Project> {
    PROJECTS.get(index)
}

pub static PROJECTS: &[Project] = &[
    Project {
        title: "OtakuPulse - Discord Anime Bot",
        category: "Full-Stack Development",
        description: "A comprehensive Discord bot that provides real-time anime and manga updates, daily quotes, trailers, and rankings with a beautiful web dashboard.",
        long_description: "OtakuPulse is an all-in-one anime & manga Discord bot with a web dashboard. It provides real-time notifications for new episodes, manga chapters, daily anime quotes, latest trailers, and top rankings. Features Discord OAuth2 authentication and customizable server settings.",
        tags: &["Node.js", "Discord.js", "MongoDB", "Express.js", "OAuth2", "AniList API"],
        mockup: "/projects/otakupulse-mockup.jpg",
        live_url: Some("https://otakupulse.onrender.com/"),
        github_url: Some("https://github.com/nishal21/OtakuPulse"),
        color: "from-blue-400 to-purple-400",
        challenges: &[
            "Implementing real-time anime/manga API integrations",
            "Managing Discord OAuth2 authentication flow",
            "Handling multiple Discord servers with different settings",
        ],
        solutions: &[
            "Built efficient API polling system with rate limiting",
            "Implemented secure Discord OAuth2 with session management",
            "Created flexible server configuration system with database storage",
        ],
        features: &[
            "Real-time anime & manga notifications",
            "Daily anime quotes with automated posting",
            "Web dashboard with Discord OAuth2",
            "Comprehensive search functionality",
            "Server-specific customization settings",
        ],
        tech_stack: &[
            ("frontend", &["HTML5", "CSS3", "JavaScript", "Bootstrap"]),
            ("backend", &["Node.js", "Express.js", "Discord.js"]),
            ("database", &["MongoDB"]),
            ("apis", &["AniList API", "Discord API"]),
            ("deployment", &["Render", "MongoDB Atlas"]),
        ],
    },
    Project {
        title: "ILLBOT - AI Writing Assistant",
        category: "AI/Machine Learning",
        description: "An advanced AI-powered writing assistant that rivals QuillBot, offering enhanced text improvement, paraphrasing, and content generation capabilities.",
        long_description: "ILLBOT is a sophisticated AI writing tool built with React and TypeScript, powered by Google Gemini API. It provides advanced text enhancement, paraphrasing, grammar checking, and content generation with more features than traditional tools like QuillBot.",
        tags: &["React", "TypeScript", "Gemini API", "AI/ML", "Vite", "Tailwind CSS"],
        mockup: "/projects/illbot-mockup.jpg",
        live_url: Some("https://illbot.netlify.app/"),
        github_url: Some("https://github.com/nishal21/ILLBOT"),
        color: "from-green-400 to-cyan-400",
        challenges: &[
            "Integrating Gemini API for reliable text transformations",
            "Creating intuitive UI for complex writing features",
            "Keeping response latency low for long documents",
        ],
        solutions: &[
            "Designed prompt templates tuned per writing mode",
            "Split the editor into focused, single-purpose panels",
            "Streamed API responses and chunked long inputs",
        ],
        features: &[
            "Paraphrasing with adjustable tone",
            "Grammar and clarity checking",
            "Content generation from outlines",
            "Multi-language support",
            "History of past transformations",
        ],
        tech_stack: &[
            ("frontend", &["React", "TypeScript", "Tailwind CSS", "Vite"]),
            ("apis", &["Google Gemini API"]),
            ("deployment", &["Netlify"]),
        ],
    },
    Project {
        title: "NMHelper - School Management System",
        category: "Web Development",
        description: "A specialized system for Kerala schools to streamline noon meal management by collecting class strength data, reducing manual work for teachers and clerks.",
        long_description: "NMHelper is a web-based solution designed specifically for Kerala schools to automate the collection of class strength data required for noon meal programs. The system eliminates the tedious manual process of going class-to-class to collect attendance information.",
        tags: &["PHP", "MySQL", "Bootstrap", "JavaScript", "School Management", "Kerala Education"],
        mockup: "/projects/nmhelper-mockup.jpg",
        live_url: Some("https://nmhelper.in/"),
        github_url: None, // private repository
        color: "from-yellow-400 to-orange-400",
        challenges: &[
            "Digitizing a paper workflow used daily by non-technical staff",
            "Supporting Malayalam alongside English",
            "Working reliably on low-end school hardware",
        ],
        solutions: &[
            "Kept the UI to a single daily form per class teacher",
            "Added full Malayalam localization",
            "Server-rendered pages with minimal client scripting",
        ],
        features: &[
            "Daily class strength collection",
            "Automated noon meal reports",
            "Malayalam Support",
            "Role-based Access",
        ],
        tech_stack: &[
            ("frontend", &["HTML5", "CSS3", "Bootstrap", "JavaScript"]),
            ("backend", &["PHP"]),
            ("database", &["MySQL"]),
            ("features", &["Malayalam Support", "Role-based Access"]),
        ],
    },
    Project {
        title: "Askira - Form Builder Platform",
        category: "Full-Stack Development",
        description: "A feature-rich form builder platform currently in development, offering advanced form creation, customization, and data collection capabilities.",
        long_description: "Askira is an ambitious form builder project that aims to provide comprehensive form creation tools with advanced features like conditional logic, custom styling, real-time collaboration, and powerful analytics. Currently in active development phase.",
        tags: &["React", "Node.js", "TypeScript", "Form Builder", "Real-time", "In Development"],
        mockup: "/projects/askira-mockup.jpg",
        live_url: None,   // still in development
        github_url: None, // private during development
        color: "from-purple-400 to-pink-400",
        challenges: &[
            "Modeling arbitrarily nested conditional form logic",
            "Creating scalable real-time collaboration features",
        ],
        solutions: &[
            "Built a declarative form schema evaluated client-side",
            "Implementing WebSocket-based real-time updates with conflict resolution",
        ],
        features: &[
            "Drag-and-drop form builder",
            "Conditional logic between fields",
            "Real-time Collaboration",
            "Advanced Analytics",
        ],
        tech_stack: &[
            ("frontend", &["React", "TypeScript"]),
            ("backend", &["Node.js"]),
            ("features", &["Real-time Collaboration", "Advanced Analytics"]),
        ],
    },
    Project {
        title: "PromptCrafter AI - Prompt Engineering Tool",
        category: "AI/Machine Learning",
        description: "An advanced prompt engineering assistant that transforms raw ideas into powerful, contextual prompts for various AI tools and platforms.",
        long_description: "PromptCrafter AI is a sophisticated prompt engineering tool built with React and TypeScript, powered by Google Gemini API. It helps users create optimized prompts for different AI platforms with features like tone customization, expertise levels, and multi-language support.",
        tags: &["React", "TypeScript", "Gemini API", "Prompt Engineering", "AI Tools", "Vite"],
        mockup: "/projects/promptcrafter-mockup.jpg",
        live_url: Some("https://crafterai.netlify.app/"),
        github_url: Some("https://github.com/nishal21/PromptCrafter"),
        color: "from-cyan-400 to-blue-400",
        challenges: &[
            "Producing prompts that transfer across AI platforms",
            "Explaining prompt quality to non-expert users",
        ],
        solutions: &[
            "Platform-specific prompt templates with shared structure",
            "Inline scoring and suggestions on generated prompts",
        ],
        features: &[
            "Idea-to-prompt transformation",
            "Tone and expertise level controls",
            "Multi-language prompt output",
            "Per-platform prompt formats",
        ],
        tech_stack: &[
            ("frontend", &["React", "TypeScript", "Vite"]),
            ("apis", &["Google Gemini API"]),
            ("deployment", &["Netlify"]),
        ],
    },
    Project {
        title: "StudyForge - AI Study Companion",
        category: "AI/Machine Learning",
        description: "A next-gen AI-powered study platform offering smart note generation, flashcards, quizzes, and personalized learning tools for students.",
        long_description: "StudyForge turns source material into structured study aids: smart notes, flashcards, and quizzes generated from uploaded documents, with spaced repetition and progress tracking tailored to each learner.",
        tags: &["React", "TypeScript", "Gemini API", "AI/ML", "Vite", "Tailwind CSS", "PDF Parsing", "Flashcards", "Quizzes"],
        mockup: "/projects/studyforge-mockup.jpg",
        live_url: Some("https://studyforgeai.netlify.app/"),
        github_url: Some("https://github.com/nishal21/StudyForge"),
        color: "from-indigo-400 to-purple-400",
        challenges: &[
            "Extracting usable text from varied PDF layouts",
            "Generating quiz questions that actually test understanding",
        ],
        solutions: &[
            "Client-side PDF parsing with structure heuristics",
            "Question templates validated against the source passage",
        ],
        features: &[
            "Smart note generation from documents",
            "Flashcards with spaced repetition",
            "Auto-generated quizzes",
            "Personal progress tracking",
        ],
        tech_stack: &[
            ("frontend", &["React", "TypeScript", "Tailwind CSS", "Vite"]),
            ("apis", &["Google Gemini API"]),
            ("deployment", &["Netlify"]),
        ],
    },
    Project {
        title: "StepSolve - AI Math & Science Solver",
        category: "AI/Machine Learning",
        description: "An AI-powered platform for step-by-step solutions to math and science problems, featuring OCR, LaTeX, and natural language support.",
        long_description: "StepSolve accepts typed, photographed, or spoken problems and walks through the solution step by step, rendering working in LaTeX and explaining each transformation in plain language.",
        tags: &["React", "TypeScript", "Gemini API", "AI/ML", "OCR", "LaTeX", "Tailwind CSS", "Vite"],
        mockup: "/projects/stepsolve-mockup.jpg",
        live_url: Some("https://stepsolve.netlify.app/"),
        github_url: Some("https://github.com/nishal21/stepsolve"),
        color: "from-red-400 to-orange-400",
        challenges: &[
            "Reading handwritten equations through OCR",
            "Rendering intermediate steps as readable LaTeX",
        ],
        solutions: &[
            "OCR pre-processing with equation-aware cleanup",
            "Step-by-step LaTeX rendering with plain-language notes",
        ],
        features: &[
            "Photo, text, and voice problem input",
            "Step-by-step worked solutions",
            "LaTeX-rendered mathematics",
            "Covers math, physics, and chemistry",
        ],
        tech_stack: &[
            ("frontend", &["React", "TypeScript", "Tailwind CSS", "Vite"]),
            ("apis", &["Google Gemini API", "OCR"]),
            ("deployment", &["Netlify"]),
        ],
    },
    Project {
        title: "Otazumi - Anime Streaming App",
        category: "Full-Stack Development",
        description: "A comprehensive anime streaming platform with modern UI, featuring extensive anime library, streaming capabilities, and user-friendly interface for anime enthusiasts.",
        long_description: "Otazumi is a full anime streaming experience: searchable library, episode tracking, watchlists, and a player tuned for long viewing sessions, backed by community anime APIs.",
        tags: &["React", "Node.js", "Anime API", "Streaming", "MongoDB", "Express.js"],
        mockup: "/projects/otazumi-mockup.jpg",
        live_url: Some("https://www.otazumi.page/"),
        github_url: Some("https://github.com/nishal21/otazumi"),
        color: "from-pink-400 to-rose-400",
        challenges: &[
            "Aggregating metadata from multiple anime sources",
            "Keeping playback smooth on slow connections",
        ],
        solutions: &[
            "Normalized metadata layer over the upstream APIs",
            "Adaptive quality selection in the player",
        ],
        features: &[
            "Extensive searchable anime library",
            "Watchlists and episode tracking",
            "Responsive player UI",
            "Trending and seasonal charts",
        ],
        tech_stack: &[
            ("frontend", &["React"]),
            ("backend", &["Node.js", "Express.js"]),
            ("database", &["MongoDB"]),
            ("apis", &["Anime API"]),
        ],
    },
    Project {
        title: "Veyra - Next-Gen Programming Language",
        category: "Programming Languages",
        description: "Veyra is a modern, open-source programming language designed for the future, featuring innovative syntax, powerful features, and extensive documentation.",
        long_description: "Veyra is an experimental open-source programming language exploring approachable syntax with modern semantics. The project ships a reference interpreter, language documentation, and a web playground.",
        tags: &["Programming Language", "Compiler", "Open Source", "TypeScript", "Documentation", "Syntax Design"],
        mockup: "/projects/veyra-mockup.jpg",
        live_url: Some("https://nishal21.github.io/veyraweb/"),
        github_url: Some("https://github.com/nishal21/veyra"),
        color: "from-emerald-400 to-teal-400",
        challenges: &[
            "Designing a grammar that stays unambiguous as it grows",
            "Writing documentation that teaches rather than lists",
        ],
        solutions: &[
            "Iterated the grammar against a test corpus of programs",
            "Example-first documentation with runnable snippets",
        ],
        features: &[
            "Reference interpreter",
            "Language specification and docs",
            "Web playground",
            "Open-source contribution guides",
        ],
        tech_stack: &[
            ("language", &["TypeScript"]),
            ("docs", &["Markdown", "GitHub Pages"]),
        ],
    },
    Project {
        title: "Musico - Song Information Getter",
        category: "Web Development",
        description: "A powerful song information retrieval tool that fetches comprehensive music data, lyrics, artist details, and album information from various music APIs.",
        long_description: "Musico pulls together song metadata, lyrics, artist biographies, and album details from multiple music APIs into one clean search experience.",
        tags: &["React", "Music API", "Song Info", "JavaScript", "API Integration"],
        mockup: "/projects/musico-mockup.jpg",
        live_url: Some("https://musico21.netlify.app/"),
        github_url: Some("https://github.com/nishal21/musico"),
        color: "from-orange-400 to-yellow-400",
        challenges: &[
            "Reconciling conflicting metadata across music APIs",
            "Handling rate limits on free API tiers",
        ],
        solutions: &[
            "Source-priority merge of metadata fields",
            "Client-side caching of recent lookups",
        ],
        features: &[
            "Song, artist, and album search",
            "Lyrics display",
            "Rich artist details",
            "Album artwork and track listings",
        ],
        tech_stack: &[
            ("frontend", &["React", "JavaScript"]),
            ("apis", &["Music APIs"]),
            ("deployment", &["Netlify"]),
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoCategory {
    MusicRemix,
    Amv,
    Gaming,
    Automotive,
    AnimeContent,
}

impl VideoCategory {
    pub const ALL: [VideoCategory; 5] = [
        VideoCategory::MusicRemix,
        VideoCategory::Amv,
        VideoCategory::Gaming,
        VideoCategory::Automotive,
        VideoCategory::AnimeContent,
    ];

    pub fn label(self) -> &'static str {
        match self {
            VideoCategory::MusicRemix => "Music Remixes",
            VideoCategory::Amv => "AMV",
            VideoCategory::Gaming => "Gaming Edits",
            VideoCategory::Automotive => "Automotive",
            VideoCategory::AnimeContent => "Anime Content",
        }
    }

    /// Short name shown on video cards.
    pub fn tag(self) -> &'static str {
        match self {
            VideoCategory::MusicRemix => "music remix",
            VideoCategory::Amv => "amv",
            VideoCategory::Gaming => "gaming",
            VideoCategory::Automotive => "automotive",
            VideoCategory::AnimeContent => "anime content",
        }
    }
}

pub struct Video {
    pub title: &'static str,
    pub category: VideoCategory,
    pub thumbnail: &'static str,
    pub duration: &'static str,
    pub views: &'static str,
    pub date: &'static str,
    pub description: &'static str,
    pub youtube_id: &'static str,
    pub tags: &'static [&'static str],
    pub client: &'static str,
    pub role: &'static str,
    pub equipment: &'static [&'static str],
}

impl Video {
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.youtube_id)
    }
}

pub static VIDEOS: &[Video] = &[
    Video {
        title: "Maand x Jhol Music Fusion",
        category: VideoCategory::MusicRemix,
        thumbnail: "/thumbnails/9.jpg",
        duration: "7:09",
        views: "83K",
        date: "Nov 4, 2024",
        description: "A soulful fusion blending traditional and modern South Asian sounds, featuring Bayaan, Rovalio, Hasan Raheem, Annural Khalid, and Maanu.",
        youtube_id: "vW6OfawpNdQ",
        tags: &["Music Fusion", "South Asian", "Reverb"],
        client: "DemonKing0.___",
        role: "Music Producer, Audio Engineer",
        equipment: &["FL Studio"],
    },
    Video {
        title: "The JDM Legend Returns: Nissan GTR R33 Godzilla on the Streets!",
        category: VideoCategory::Automotive,
        thumbnail: "/thumbnails/1.jpg",
        duration: "0:34",
        views: "17",
        date: "Nov 4, 2024",
        description: "They called it Godzilla. But it wasn't just a monster… It was a revolution. Epic JDM content featuring the legendary Nissan GTR R33.",
        youtube_id: "m2M1j7NnwXo",
        tags: &["JDM", "GTR R33", "Automotive"],
        client: "DemonKing0.___",
        role: "Video Editor, Automotive Content Creator",
        equipment: &["DaVinci Resolve", "Blurrr"],
    },
    Video {
        title: "RDR 2 (2018) Cinematic Video Edit",
        category: VideoCategory::Gaming,
        thumbnail: "/thumbnails/2.jpg",
        duration: "0:43",
        views: "40",
        date: "Feb 4, 2024",
        description: "Cinematic video edit showcasing the beauty and storytelling of Red Dead Redemption 2 with stunning visuals and atmospheric editing.",
        youtube_id: "QNRf5U2ltD0",
        tags: &["Gaming", "RDR2", "Cinematic"],
        client: "DemonKing0.___",
        role: "Video Editor, Gaming Content Creator",
        equipment: &["DaVinci Resolve", "Blurrr"],
    },
    Video {
        title: "Another Time × Kaattu | Krishnahazar x Aromal Chekaver",
        category: VideoCategory::MusicRemix,
        thumbnail: "/thumbnails/5.jpg",
        duration: "5:29",
        views: "5",
        date: "Jan 26, 2025",
        description: "A powerful fusion of \"Another Time\" by Krishnahazar and \"Kaattu\" (Aromal Chekaver theme). This track blends epic cinematic tension with tribal Malayalam energy.",
        youtube_id: "QoPm9jL4Yf8",
        tags: &["Malayalam", "Fusion", "Cinematic"],
        client: "DemonKing0.___",
        role: "Music Producer, Sound Designer",
        equipment: &["FL Studio"],
    },
    Video {
        title: "Cherrapunji x Jupiter Mazha (Reverb) – Rainy Vibes",
        category: VideoCategory::MusicRemix,
        thumbnail: "/thumbnails/4.jpg",
        duration: "7:02",
        views: "114",
        date: "Dec 4, 2024",
        description: "Atmospheric reverb remix featuring Hanan Shah × Dhanwin K B, creating the perfect rainy day vibes with Kerala-inspired sounds.",
        youtube_id: "mrHBzkdLtWQ",
        tags: &["Malayalam", "Reverb", "Atmospheric"],
        client: "DemonKing0.___",
        role: "Audio Engineer, Remix Artist",
        equipment: &["FL Studio"],
    },
    Video {
        title: "Chandni Raat x Jhol – Reverb Edition",
        category: VideoCategory::MusicRemix,
        thumbnail: "/thumbnails/6.jpg",
        duration: "7:58",
        views: "1.2K",
        date: "Oct 4, 2024",
        description: "Soulful reverb edition featuring Annural Khalid, Maanu & Ali Sethi. A perfect blend of romantic melodies with modern production.",
        youtube_id: "ZOo-fNhd5Kg",
        tags: &["Romantic", "Reverb", "Fusion"],
        client: "DemonKing0.___",
        role: "Music Producer, Audio Engineer",
        equipment: &["FL Studio"],
    },
    Video {
        title: "Mixed Manga Panels EDIT [AMV] - WASTE by Kxllswxtch",
        category: VideoCategory::Amv,
        thumbnail: "/thumbnails/3.jpg",
        duration: "5:33",
        views: "7",
        date: "Jan 26, 2025",
        description: "Intense warrior-themed edit of MIXED MANGA PANELS.",
        youtube_id: "5ucLremIVWE",
        tags: &["Epic", "Warrior", "Anime", "Manga"],
        client: "DemonKing0.___",
        role: "AMV Editor, Anime Content Creator",
        equipment: &["Davinci Resolve", "Blurrr"],
    },
    Video {
        title: "One Piece AMV - Garp VS BB Pirates Incoming",
        category: VideoCategory::Amv,
        thumbnail: "/thumbnails/8.jpg",
        duration: "0:12",
        views: "81",
        date: "Feb 4, 2024",
        description: "Epic One Piece AMV featuring the legendary Marine Hero Garp in an intense battle preview against the Blackbeard Pirates.",
        youtube_id: "bjfcxX8k1hw",
        tags: &["One Piece", "AMV", "Garp", "Action"],
        client: "DemonKing0.___",
        role: "AMV Editor, Anime Content Creator",
        equipment: &["Davinci Resolve", "Blurrr"],
    },
    Video {
        title: "One Piece Live Action - Chanel (Frank Ocean)",
        category: VideoCategory::AnimeContent,
        thumbnail: "/thumbnails/7.jpg",
        duration: "0:15",
        views: "10",
        date: "Mar 4, 2024",
        description: "Stylish edit of One Piece Live Action series set to Frank Ocean's \"Chanel\" - showcasing the amazing cinematography and characters.",
        youtube_id: "KHY4zo-JEik",
        tags: &["One Piece", "Live Action", "Frank Ocean", "Cinematic"],
        client: "DemonKing0.___",
        role: "Video Editor, Content Creator",
        equipment: &["DaVinci Resolve", "Blurrr"],
    },
];

/// Gallery filter: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VideoFilter {
    #[default]
    All,
    Category(VideoCategory),
}

impl VideoFilter {
    pub fn label(self) -> &'static str {
        match self {
            VideoFilter::All => "All Videos",
            VideoFilter::Category(category) => category.label(),
        }
    }

    pub fn matches(self, video: &Video) -> bool {
        match self {
            VideoFilter::All => true,
            VideoFilter::Category(category) => video.category == category,
        }
    }

    pub fn count(self) -> usize {
        VIDEOS.iter().filter(|video| self.matches(video)).count()
    }
}

/// Videos passing `filter`, in master-list order, paired with their index into
/// [`VIDEOS`] so selection always refers to the master list.
pub fn filtered_videos(filter: VideoFilter) -> Vec<(usize, &'static Video)> {
    VIDEOS
        .iter()
        .enumerate()
        .filter(|(_, video)| filter.matches(video))
        .collect()
}

pub fn video(index: usize) -> Option<&'static Video> {
    VIDEOS.get(index)
}

pub struct SkillCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub skills: &'static [&'static str],
    pub color: &'static str,
}

pub static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "AMV Editing",
        icon: "🎬",
        skills: &["Premiere Pro", "After Effects", "Sony Vegas", "DaVinci Resolve", "Final Cut Pro"],
        color: "from-red-400 to-orange-400",
    },
    SkillCategory {
        title: "Music Production",
        icon: "🎚️",
        skills: &["FL Studio", "Ableton Live", "Logic Pro", "Audacity", "Reaper"],
        color: "from-purple-400 to-pink-400",
    },
    SkillCategory {
        title: "2D & 3D Animation",
        icon: "🎨",
        skills: &["2D Animation", "3D Modeling", "Character Design", "Motion Graphics", "Rigging"],
        color: "from-cyan-400 to-blue-400",
    },
    SkillCategory {
        title: "Visual Effects",
        icon: "✨",
        skills: &["Motion Graphics", "Color Grading", "Transitions", "Anime Effects", "Compositing"],
        color: "from-pink-400 to-rose-400",
    },
    SkillCategory {
        title: "Web Development",
        icon: "💻",
        skills: &["React", "Next.js", "TypeScript", "Tailwind CSS", "Node.js"],
        color: "from-indigo-400 to-blue-400",
    },
    SkillCategory {
        title: "Game Development",
        icon: "🎮",
        skills: &["Unity (Learning)", "Game Design", "C# (Planned)", "Level Design", "Game Mechanics"],
        color: "from-green-400 to-emerald-400",
    },
];

pub static ROLE_TAGS: &[&str] = &[
    "AMV Editor",
    "Music Remix Artist",
    "2D/3D Animator",
    "Full-Stack Developer",
    "Future Game Developer",
];

/// Number → label pairs for the about-section quick stats.
pub static STATS: &[(&str, &str)] = &[
    ("50+", "Projects Completed"),
    ("5+", "Years Experience"),
    ("100%", "Client Satisfaction"),
    ("24/7", "Learning Mode"),
];

/// Year → milestone pairs for the about-section journey timeline.
pub static JOURNEY: &[(&str, &str)] = &[
    ("2020", "Started AMV editing & coding journey (Age 13)"),
    ("2021", "First anime music videos & web projects"),
    ("2022", "Music remix & 2D animation skills"),
    ("2023", "YouTube channel & 3D modeling exploration"),
    ("2024", "Advanced development & visual effects mastery"),
    ("2025", "Planning game development studies"),
];

pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
    pub hover: &'static str,
}

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        url: "https://github.com/nishal21",
        icon: "devicon-github-plain",
        hover: "hover:text-gray-300",
    },
    SocialLink {
        label: "LinkedIn",
        url: "https://linkedin.com/in/nishal-k-167b1a328",
        icon: "devicon-linkedin-plain",
        hover: "hover:text-blue-400",
    },
    SocialLink {
        label: "YouTube",
        url: "https://youtube.com/@DemonKing0.___",
        icon: "devicon-youtube-plain",
        hover: "hover:text-red-400",
    },
    SocialLink {
        label: "Twitter",
        url: "https://twitter.com/Etainment2",
        icon: "devicon-twitter-original",
        hover: "hover:text-blue-400",
    },
    SocialLink {
        label: "Instagram",
        url: "https://instagram.com/demonking.___",
        icon: "devicon-instagram-plain",
        hover: "hover:text-pink-400",
    },
];

pub struct ContactInfo {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    pub color: &'static str,
}

pub static CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        label: "Email",
        value: "nishalamv@gmail.com",
        href: "mailto:nishalamv@gmail.com",
        color: "from-blue-400 to-cyan-400",
    },
    ContactInfo {
        label: "Phone",
        value: "+91 xxxxxxxxxx",
        href: "tel:+91xxxxxxxxxxx",
        color: "from-green-400 to-emerald-400",
    },
    ContactInfo {
        label: "Location",
        value: "Malappuram, Kerala, India",
        href: "https://maps.google.com/?q=Malappuram,Kerala,India",
        color: "from-red-400 to-orange-400",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_selection_returns_exactly_that_project() {
        let selected = project(2).expect("project 2 exists");
        assert_eq!(selected.title, PROJECTS[2].title);
        assert_eq!(selected.category, "Web Development");
    }

    #[test]
    fn out_of_range_selection_is_no_selection() {
        assert!(project(PROJECTS.len()).is_none());
        assert!(project(usize::MAX).is_none());
        assert!(video(VIDEOS.len()).is_none());
    }

    #[test]
    fn nullable_links_render_as_disabled_affordances() {
        // NMHelper has a live site but a private repo; Askira has neither
        let nmhelper = PROJECTS.iter().find(|p| p.title.starts_with("NMHelper")).unwrap();
        assert!(nmhelper.live_url.is_some());
        assert!(nmhelper.github_url.is_none());
        let askira = PROJECTS.iter().find(|p| p.title.starts_with("Askira")).unwrap();
        assert!(askira.live_url.is_none());
        assert!(askira.github_url.is_none());
    }

    #[test]
    fn filtering_all_is_identity() {
        let all = filtered_videos(VideoFilter::All);
        assert_eq!(all.len(), VIDEOS.len());
        let indices: Vec<_> = all.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, (0..VIDEOS.len()).collect::<Vec<_>>());
    }

    #[test]
    fn filtering_by_category_preserves_relative_order() {
        let amv = filtered_videos(VideoFilter::Category(VideoCategory::Amv));
        assert_eq!(amv.len(), 2);
        assert!(amv.iter().all(|(_, v)| v.category == VideoCategory::Amv));
        let indices: Vec<_> = amv.iter().map(|(i, _)| *i).collect();
        let mut sorted = indices.clone();
        sorted.sort_unstable();
        assert_eq!(indices, sorted);
    }

    #[test]
    fn category_counts_partition_the_gallery() {
        let total: usize = VideoCategory::ALL
            .iter()
            .map(|&c| VideoFilter::Category(c).count())
            .sum();
        assert_eq!(total, VIDEOS.len());
        assert_eq!(VideoFilter::All.count(), VIDEOS.len());
        assert_eq!(VideoFilter::Category(VideoCategory::MusicRemix).count(), 4);
    }

    #[test]
    fn watch_url_points_at_youtube() {
        assert_eq!(
            VIDEOS[0].watch_url(),
            "https://www.youtube.com/watch?v=vW6OfawpNdQ"
        );
    }

    #[test]
    fn six_skill_categories_each_nonempty() {
        assert_eq!(SKILL_CATEGORIES.len(), 6);
        assert!(SKILL_CATEGORIES.iter().all(|c| !c.skills.is_empty()));
    }
}
