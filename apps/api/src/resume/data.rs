//! The static resume record. Built once at first use, read-only for the
//! process lifetime.

use std::sync::LazyLock;

use crate::resume::models::{
    Education, Experience, PersonalInfo, Project, ResumeDocument, Skills,
};

/// Fixed attachment filename for the PDF download.
pub const RESUME_FILENAME: &str = "Aniketh_Mungara_Resume.pdf";

static RESUME: LazyLock<ResumeDocument> = LazyLock::new(build_resume);

/// Returns the process-wide resume record.
pub fn resume_data() -> &'static ResumeDocument {
    &RESUME
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn build_resume() -> ResumeDocument {
    ResumeDocument {
        personal_info: PersonalInfo {
            name: "Aniketh Mungara".to_string(),
            title: "Full Stack Developer | AI/ML Engineer".to_string(),
            email: "aniketh@example.com".to_string(),
            phone: "+1 (XXX) XXX-XXXX".to_string(),
            location: "Arizona, USA".to_string(),
            portfolio: "https://aniketh.dev".to_string(),
            github: "github.com/AnikethMungara".to_string(),
            linkedin: "linkedin.com/in/aniketh-mungara".to_string(),
        },
        summary: "Computer Science student with minors in Business and Data Science. \
                  Passionate about creating intuitive, clean, and meaningful software \
                  solutions. Experience in full-stack development, AI/ML engineering, and \
                  data engineering with a proven track record of building scalable systems \
                  and winning hackathons."
            .to_string(),
        education: vec![Education {
            degree: "B.S. Computer Science".to_string(),
            institution: "Arizona State University".to_string(),
            location: "Tempe, AZ".to_string(),
            period: "Aug 2023 — May 2027".to_string(),
            gpa: "4.0/4.0".to_string(),
            minors: "Business, Data Science".to_string(),
            coursework: strings(&[
                "Data Structures & Algorithms",
                "Operating Systems",
                "Database Management",
                "Machine Learning",
                "Distributed Systems",
                "Software Engineering",
            ]),
        }],
        experience: vec![
            Experience {
                title: "IT Service Desk Support — W. P. Carey".to_string(),
                company: "Arizona State University".to_string(),
                location: "Tempe, AZ".to_string(),
                period: "Mar 2025 — Present".to_string(),
                responsibilities: strings(&[
                    "Resolved 50+ daily support tickets across hardware, software, and network issues with 95% first-call resolution",
                    "Managed Active Directory user accounts, group policies, and access permissions for 200+ faculty and staff",
                    "Maintained enterprise systems including Zoom Rooms, classroom AV equipment, and Windows/Mac endpoints",
                ]),
            },
            Experience {
                title: "Data Engineering Intern".to_string(),
                company: "SmartChakra / SonicScape".to_string(),
                location: "Remote".to_string(),
                period: "May — Aug 2025".to_string(),
                responsibilities: strings(&[
                    "Designed ETL pipeline ingesting 1M+ IoT sensor events/day with Apache Kafka, Spark, and PostgreSQL",
                    "Reduced query latency by 40% through partitioning, indexing, and materialized views",
                    "Built real-time anomaly detection system flagging device failures within 2 seconds using sliding-window aggregations",
                ]),
            },
            Experience {
                title: "Section Leader".to_string(),
                company: "Arizona State University".to_string(),
                location: "Tempe, AZ".to_string(),
                period: "Aug 2024 — Dec 2024".to_string(),
                responsibilities: strings(&[
                    "Facilitated interactive sessions supporting students in collaborative online and in-person environments",
                    "Designed and shared learning materials through digital platforms for diverse audiences",
                ]),
            },
            Experience {
                title: "National Head of VFX".to_string(),
                company: "Youth India Foundation".to_string(),
                location: "Remote".to_string(),
                period: "Mar 2021 — Jun 2022".to_string(),
                responsibilities: strings(&[
                    "Led team of 15 VFX artists producing 20+ motion graphics and promotional videos, reaching 500K+ viewers",
                    "Coordinated cross-functional workflows between design, video, and social media teams",
                    "Trained volunteers in Adobe After Effects, Premiere Pro, and Blender",
                ]),
            },
        ],
        projects: vec![
            Project {
                name: "DevSync — Collaborative IDE Platform".to_string(),
                tech: "Next.js, React, FastAPI, Docker, WebSockets, CRDT (Yjs), LLM Assist"
                    .to_string(),
                award: None,
                achievements: strings(&[
                    "Built distributed, real-time collaborative IDE using CRDT synchronization with sub-50ms latency",
                    "Implemented containerized FastAPI microservices with modular REST endpoints",
                    "Designed AI-assisted coding workflow with local inference and version-aware completions",
                ]),
            },
            Project {
                name: "CiteSight — AI-Powered Research Discovery".to_string(),
                tech: "Next.js, Gemini API, FastAPI, PyTorch".to_string(),
                award: Some("Winner — SunHacks 2025".to_string()),
                achievements: strings(&[
                    "Built AI research discovery platform with semantic retrieval and contextual Q&A",
                    "Integrated Gemini embeddings and reranking for 90% retrieval accuracy",
                    "Achieved 10 req/s throughput with async FastAPI batching and vector caching",
                ]),
            },
            Project {
                name: "Don'tJustWarnMe — Neural Code Correction Engine".to_string(),
                tech: "Python, PyTorch, JavaScript/TypeScript, FastAPI, VS Code API".to_string(),
                award: None,
                achievements: strings(&[
                    "Created local ML-powered code corrector detecting and fixing Python bugs in real time",
                    "Trained transformer on 20K bug→fix samples; achieved <150ms inference latency",
                    "Built VS Code extension + FastAPI backend for offline developer assistance",
                ]),
            },
            Project {
                name: "Mini-SQL Engine — Multithreaded C++ Database".to_string(),
                tech: "C++, B+ Trees, ThreadPool, OOP".to_string(),
                award: None,
                achievements: strings(&[
                    "Engineered minimal SQL processor supporting CREATE, INSERT, SELECT, and in-memory indexing",
                    "Built B+ Tree index for fast lookups with thread-safe operator pipeline",
                    "Achieved 2.3× speedup under 100+ concurrent queries",
                ]),
            },
        ],
        skills: Skills {
            languages: strings(&[
                "Python",
                "C/C++",
                "JavaScript/TypeScript",
                "Java",
                "SQL",
                "Prolog",
            ]),
            frameworks: strings(&[
                "React",
                "Next.js",
                "FastAPI",
                "Flask",
                "Node.js",
                "Tailwind CSS",
            ]),
            backend: strings(&[
                "PostgreSQL",
                "MongoDB",
                "Redis",
                "Docker",
                "Apache Kafka",
                "WebSockets",
            ]),
            ml_data: strings(&[
                "PyTorch",
                "Pandas",
                "NumPy",
                "Apache Spark",
                "Scikit-learn",
                "CRDT (Yjs)",
            ]),
        },
        certifications: vec![],
        awards: strings(&["Winner — SunHacks 2025 (CiteSight)"]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_round_trips_through_json() {
        let resume = resume_data();
        let json = serde_json::to_string(resume).unwrap();
        let parsed: ResumeDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(&parsed, resume);
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let value = serde_json::to_value(resume_data()).unwrap();
        assert!(value.get("personalInfo").is_some());
        assert!(value["skills"].get("mlData").is_some());
        // Snake-case leakage would break the frontend contract.
        assert!(value.get("personal_info").is_none());
    }

    #[test]
    fn test_award_omitted_when_absent() {
        let value = serde_json::to_value(resume_data()).unwrap();
        let projects = value["projects"].as_array().unwrap();
        assert!(projects[0].get("award").is_none(), "DevSync has no award");
        assert_eq!(projects[1]["award"], "Winner — SunHacks 2025");
    }

    #[test]
    fn test_awards_section_present() {
        assert!(!resume_data().awards.is_empty());
    }
}
