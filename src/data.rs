//! Source-of-truth profile content. Everything the site renders and
//! everything the assistant is told about comes from this one table.

use serde::Serialize;
use thiserror::Error;

#[derive(Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub experience: &'static [Experience],
    pub education: &'static [Education],
    pub projects: &'static [Project],
    pub skills: &'static [&'static str],
    pub contact: Contact,
}

#[derive(Serialize)]
pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
}

#[derive(Serialize)]
pub struct Education {
    pub school: &'static str,
    pub degree: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
}

#[derive(Serialize)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub link: &'static str,
    pub image: &'static str,
}

#[derive(Serialize)]
pub struct Contact {
    pub email: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
}

pub static DATA: Profile = Profile {
    name: "Aditya Das",
    role: "Senior ML Engineer",
    bio: "Senior Full-Stack ML Engineer with 8+ years of experience building scalable distributed systems, high-performance web applications, and agentic AI tools. Passionate about LLMs, RAG, and the intersection of AI and productivity.",
    experience: &[
        Experience {
            company: "Adobe",
            role: "Machine Learning Engineer",
            period: "Aug 2025 - Present",
            description: "Contributing to core generative AI in Adobe Acrobat, including Acrobat Studios and AI Assistant. Spearheaded multi-language parity for GenAI QnA and architected end-to-end Synthetic Data Generation pipelines.",
            details: &[
                "Spearheaded multi-language parity for Generative AI QnA in Acrobat PDF Spaces (FR, DE, ES, PT, IT, JP).",
                "Architected end-to-end Synthetic Data Generation pipeline for rapid model training requirements.",
                "Automated advanced MLOps evaluation frameworks for ethical AI alignment and product safety.",
                "Scaled QnA asset generation to 100 assets in Acrobat PDF Spaces, improving feature robustness.",
            ],
        },
        Experience {
            company: "Adobe",
            role: "Software Engineer in ML",
            period: "Nov 2023 - Aug 2025",
            description: "Member of the Document Cloud AI team contributing to the development of core generative AI functionalities within the Adobe Acrobat product family.",
            details: &[
                "Developed core generative AI functionalities for Adobe Acrobat product family.",
                "Contributed to the launch of Acrobat AI Assistant and Acrobat Studios.",
                "Worked on distributed machine learning systems for document intelligence.",
            ],
        },
        Experience {
            company: "Adobe",
            role: "Full Stack Web Developer - III",
            period: "Jan 2023 - Nov 2023",
            description: "Developed the Graph Connector and core integrations for Adobe Acrobat Sign within the Sign Integration team.",
            details: &[
                "Lead development of the Graph Connector for Adobe Acrobat Sign.",
                "Collaborated with Microsoft ecosystem for seamless document signature integrations.",
                "Managed end-to-end integration lifecycle for enterprise-grade signature services.",
            ],
        },
        Experience {
            company: "Adobe",
            role: "Full Stack Web Developer - II",
            period: "Jan 2020 - Jan 2023",
            description: "Worked on high-scale integrations for Adobe Sign, focusing on reliability and seamless user experience.",
            details: &[
                "Developed and maintained mission-critical integrations for Adobe Sign.",
                "Optimized high-performance web applications for global enterprise customers.",
                "Collaborated with cross-functional teams to deliver localized signature solutions.",
            ],
        },
        Experience {
            company: "Adobe",
            role: "Web Developer Intern",
            period: "May 2019 - Aug 2019",
            description: "Created an NLP pilot for Digital Enrollment and worked on security projects for Adobe Sign using Java, Node.js, and GCP.",
            details: &[
                "Created an NLP pilot program for Document Cloud's Digital Enrollment Team.",
                "Implemented security protocols and integration projects with the Adobe Sign team.",
                "Tech Stack: Java, Node.js, GCP, and Firebase.",
            ],
        },
        Experience {
            company: "Scryptonite",
            role: "Co-Founder / CTO",
            period: "May 2017 - Dec 2018",
            description: "Provided technical solutions for startups, including Android apps and motion graphics. Bootstrapped and built a computer game internally.",
            details: &[
                "Founded a technical solutions startup in Bengaluru focusing on mobile and web platforms.",
                "Bootstrapped internal resources to develop and publish a full-scale computer game.",
                "Managed technical roadmaps and resource allocation for multiple client projects.",
            ],
        },
        Experience {
            company: "Old Dominion University",
            role: "Summer Research Intern",
            period: "Jul 2017 - Aug 2017",
            description: "Led research on 'Aggression detection in Alzheimer's Patients'. Lead Android and Front-end developer using LAMP stack and IBM Watson.",
            details: &[
                "Headed a team of four for the research project 'Aggression detection in Alzheimer's Patients'.",
                "Leveraged IBM Watson's Tone Analyzer API for real-time aggression score calculation.",
                "Developed the core Android application and dashboard using the LAMP stack.",
            ],
        },
        Experience {
            company: "Acharya Institutes",
            role: "Research Assistant",
            period: "Sep 2016 - Mar 2017",
            description: "Designed and implemented an emotion detection program using C#, OpenCV, and Affectiva SDK to track facial micro-features.",
            details: &[
                "Implemented facial feature tracking for real-time emotion detection in office environments.",
                "Developed on the Visual Studio platform using C# and OpenCV libraries.",
                "Project served as a qualifier for the Old Dominion University summer research internship.",
            ],
        },
        Experience {
            company: "Freelance",
            role: "Technical Head & Lead Android Dev",
            period: "Feb 2015 - Mar 2017",
            description: "Headed a 10-member technical team and led Android development for major university festival applications (Acharya HABBA).",
            details: &[
                "Managed a team of 10 developers for the Acharya HABBA technical ecosystem.",
                "Architected and released the official Android applications for the 17 and 18 festival cycles.",
                "Coordinated with Design and Web teams to synchronize branding and features across platforms.",
            ],
        },
    ],
    education: &[
        Education {
            school: "The University of Texas at Arlington",
            degree: "Master's degree, Computer Engineering",
            period: "Aug 2018 – Nov 2019",
            description: "Concentrated in Machine Learning and Database Systems. Graduated in 18 months via accelerated coursework including Computer Vision, Neural Networks, and AI.",
            details: &[
                "Completed specialized courses in Neural Networks, Computer Vision, and Data Mining.",
                "Maintained high intensity with extra courses to graduate in 18 months.",
                "Final projects focused on Statistical Pattern Recognition and Neural Network architectures.",
            ],
        },
        Education {
            school: "Acharya Institute of Technology",
            degree: "Bachelor's Degree, Computer Science and Engineering",
            period: "2014 – 2018",
            description: "Active member of Acharya HABBA and Computer Science Forum Lakshya. Contributed to Compass magazine and the Ideating Club.",
            details: &[
                "Core member of the Ideating Club and writer for Compass magazine.",
                "Active within the Lakshaya CS forum, organizing technical workshops and seminars.",
                "Heavily involved in the organization of Acharya HABBA, the largest techno-cultural fest in Bengaluru.",
            ],
        },
    ],
    projects: &[
        Project {
            title: "Agentic Workflow Engine",
            description: "A framework for building and deploying multi-agent AI systems with built-in observability.",
            tech: &["Next.js", "Python", "LangGraph", "PostgreSQL"],
            link: "https://example.com/agentic",
            image: "https://images.unsplash.com/photo-1677442136019-21780ecad995?auto=format&fit=crop&q=80&w=800",
        },
        Project {
            title: "Distributed Media Pipeline",
            description: "High-performance video processing pipeline with automated captioning and metadata extraction.",
            tech: &["Go", "Redis", "Celery", "Python"],
            link: "https://example.com/pipeline",
            image: "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?auto=format&fit=crop&q=80&w=800",
        },
        Project {
            title: "Portfolio 2.0",
            description: "Personal portfolio with gated AI-driven insights for recruiters.",
            tech: &["Next.js", "Tailwind", "Framer Motion", "Vercel AI SDK"],
            link: "https://dasaditya.com",
            image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&q=80&w=800",
        },
    ],
    skills: &[
        "Next.js",
        "React",
        "TypeScript",
        "Node.js",
        "Python",
        "PyTorch",
        "LLMs",
        "PostgreSQL",
        "Redis",
        "Docker",
        "AWS",
    ],
    contact: Contact {
        email: "aditya.das8.ad@gmail.com",
        linkedin: "https://www.linkedin.com/in/aditya-das-02414862/",
        github: "https://github.com/adityadas8888",
    },
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntegrityError {
    #[error("profile data is incomplete: name or role is missing")]
    MissingIdentity,
    #[error("no projects found in the content source")]
    NoProjects,
}

/// Deployment gate: a build with broken content must not ship.
pub fn verify_integrity() -> Result<(), IntegrityError> {
    if DATA.name.trim().is_empty() || DATA.role.trim().is_empty() {
        return Err(IntegrityError::MissingIdentity);
    }
    if DATA.projects.is_empty() {
        return Err(IntegrityError::NoProjects);
    }
    Ok(())
}

/// Non-fatal deploy findings. A missing key only degrades the chat, so it
/// warns instead of failing the check.
pub fn config_warnings() -> Vec<String> {
    let mut warnings = Vec::new();
    let has_key = |name: &str| {
        std::env::var(name)
            .map(|value| !value.trim().is_empty())
            .unwrap_or(false)
    };
    if !has_key("GROQ_API_KEY") && !has_key("OPENAI_API_KEY") {
        warnings.push(
            "no assistant key configured; chat will report a provider error".to_string(),
        );
    }
    warnings
}
