use super::types::*;
use chrono::NaiveDate;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

impl ContentCatalog {
    /// The site's own content, used when no catalog file is configured.
    ///
    /// The three posts are the ones the chat assistant describes. Their slugs,
    /// dates and read times are assigned here and do not match the live blog's
    /// slugs (`ai-portfolio-project`, `my-development-journey`,
    /// `gaming-to-coding`), so bookmarks saved by the live site resolve to no
    /// built-in post. Configure a catalog file to serve the live posts.
    pub fn builtin() -> Self {
        Self {
            skills: Skills {
                frontend: strings(&["React/Next.js", "TypeScript", "Tailwind CSS", "SCSS"]),
                backend: strings(&["Node.js", "Express", "PHP"]),
                tools: strings(&[
                    "Git",
                    "Firebase",
                    "Recharts",
                    "Zustand",
                    "Stripe",
                    "Framer Motion",
                    "AI",
                ]),
            },
            projects: vec![
                Project {
                    title: "Personal Budget Tracker".to_string(),
                    description: "A user-friendly web app that helps you manage your finances by tracking income and expenses with secure authentication and interactive visual insights.".to_string(),
                    tech: strings(&[
                        "React",
                        "TypeScript",
                        "Tailwind CSS",
                        "Firebase",
                        "Recharts",
                        "React Hook Form",
                        "Currency.js",
                    ]),
                    github: "https://github.com/Ayyubiy90/budget-tracker".to_string(),
                    live: "https://budget-tracker-ashen.vercel.app/".to_string(),
                },
                Project {
                    title: "Modern Dashboard".to_string(),
                    description: "An interactive dashboard that demonstrates your ability to integrate multiple APIs, manage complex data flows, and create a clean, user-friendly interface.".to_string(),
                    tech: strings(&[
                        "TypeScript",
                        "JavaScript",
                        "Tailwind CSS",
                        "Zustand",
                        "Hello Pangea DND",
                        "React Hot Toast",
                        "React Error Boundary",
                    ]),
                    github: "https://github.com/Ayyubiy90/personalized-dashboard-with-API-integrations".to_string(),
                    live: "https://personalized-dashboard-with-api-integrations.vercel.app/".to_string(),
                },
                Project {
                    title: "ModernStore - React E-commerce Platform".to_string(),
                    description: "A fully functional e-commerce store with a modern, polished design and engaging animations.".to_string(),
                    tech: strings(&[
                        "React",
                        "TypeScript",
                        "Tailwind CSS",
                        "Zustand",
                        "Stripe",
                        "Framer Motion",
                    ]),
                    github: "https://github.com/Ayyubiy90/modern-e-commerce-store".to_string(),
                    live: "https://modern-e-commerce-store.vercel.app/".to_string(),
                },
                Project {
                    title: "Siphome Smart Home System".to_string(),
                    description: "This project aims to revolutionize how we interact with our homes by providing advanced smart home solutions.".to_string(),
                    tech: strings(&["React", "JavaScript", "HTML", "CSS"]),
                    github: "https://github.com/Ayyubiy90/siphome".to_string(),
                    live: "https://siphome-chinxas-projects.vercel.app/".to_string(),
                },
            ],
            posts: vec![
                BlogPost {
                    title: "Building an AI-Powered Chat Assistant".to_string(),
                    description: "Learn how to create a sophisticated chatbot using modern AI technologies.".to_string(),
                    date: date(2024, 11, 17),
                    read_time: "10 min read".to_string(),
                    slug: "ai-chat-assistant".to_string(),
                    topics: strings(&["AI", "ChatGPT", "React"]),
                },
                BlogPost {
                    title: "The Future of Web Development".to_string(),
                    description: "Exploring upcoming trends and technologies in web development.".to_string(),
                    date: date(2024, 3, 26),
                    read_time: "6 min read".to_string(),
                    slug: "future-of-web-development".to_string(),
                    topics: strings(&["Web Development", "Trends", "Technology"]),
                },
                BlogPost {
                    title: "Optimizing React Applications".to_string(),
                    description: "Best practices and techniques for improving React app performance.".to_string(),
                    date: date(2024, 1, 15),
                    read_time: "8 min read".to_string(),
                    slug: "optimizing-react-applications".to_string(),
                    topics: strings(&["React", "Performance", "Optimization"]),
                },
            ],
            bio: Bio {
                introduction: "Frontend Developer with 3 years of experience building scalable web applications, specializing in the React ecosystem and modern web technologies.".to_string(),
                details: strings(&[
                    "I'm a Frontend Developer from Lagos, Nigeria, with a growing interest in backend development. Self-taught for 2 years, with an additional year of project experience, I'm passionate about creating responsive and intuitive web applications.",
                    "Currently pursuing a bachelor's degree in Computer Science, I'm open to remote full-time, part-time, or contract roles. Outside of coding, I'm an avid tech enthusiast, love exploring new gadgets, and enjoy gaming.",
                ]),
                experience: "I'm a Frontend Developer with 3 years of experience building scalable web applications, specializing in the React ecosystem and modern web technologies. I'm currently pursuing a bachelor's degree in Computer Science and I'm open to remote full-time, part-time, or contract roles. Would you like to know more about my experience with any specific technology?".to_string(),
                resume_link: "/Abdullah Abdurazaq CV.pdf".to_string(),
            },
        }
    }
}

impl Default for ContentCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
