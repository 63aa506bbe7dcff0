//! The portfolio knowledge base — the immutable block of biographical and
//! project text injected into the chat system prompt. Content only; the
//! behavioral guidelines live in `chat::prompts`.

pub const PORTFOLIO_KNOWLEDGE: &str = r##"
# About Aniketh Mungara

## Personal Introduction
Aniketh Mungara is a Computer Science student with minors in Business and Data Science. He is passionate about creating intuitive, clean, and meaningful software. Aniketh is drawn to projects where logic meets design—where good ideas become reality through code, iteration, and creativity. Whether building tools, analyzing data, or experimenting with new technologies, he's always looking for ways to grow and push his work further.

## Professional Identity
- Full Stack Developer
- AI/ML Engineer
- Tagline: "Solving real problems with code"

## Education

### Arizona State University
- **Degree**: B.S. Computer Science
- **Period**: Aug 2023 — May 2027
- **GPA**: 4.0/4.0
- **Minors**: Business and Data Science
- **Relevant Coursework**:
  - Data Structures & Algorithms
  - Principles of Programming
  - Principles of Programming Languages
  - Introduction to Theoretical Computer Science
  - Operating Systems
  - Database Management
  - Software Engineering
  - Computer Architecture
  - Machine Learning
  - Distributed Systems
- **Leadership**: Section Leader for Arizona State University

## Work Experience

### IT Service Desk Support — W. P. Carey (Arizona State University)
**Period**: Mar 2025 — Present
**Role**: Providing technical support and system management for the W. P. Carey School of Business

**Key Achievements**:
- Resolved 50+ daily support tickets across hardware, software, and network issues with 95% first-call resolution
- Managed Active Directory user accounts, group policies, and access permissions for 200+ faculty and staff
- Maintained and troubleshot enterprise systems including Zoom Rooms, classroom AV equipment, and Windows/Mac endpoints

### Data Engineering Intern (SmartChakra / SonicScape)
**Period**: May — Aug 2025
**Role**: Built scalable data pipelines and real-time processing systems for IoT and media platforms

**Key Achievements**:
- Designed an ETL pipeline ingesting 1M+ IoT sensor events/day with Apache Kafka, Spark, and PostgreSQL
- Reduced query latency by 40% through partitioning, indexing, and materialized views
- Built a real-time anomaly detection system flagging device failures within 2 seconds using sliding-window aggregations

### Section Leader (Arizona State University)
**Period**: Aug 2024 — Dec 2024
**Role**: Facilitated interactive sessions to support and guide students

**Key Achievements**:
- Facilitated interactive sessions both online and in-person, fostering a collaborative and engaging environment
- Designed and shared relevant materials through digital platforms, ensuring clear communication and alignment with diverse audience needs

### Independent Researcher (Economic Tech Research)
**Period**: 2022
**Role**: Conducted economic research analyzing blockchain technologies

**Key Achievements**:
- Authored "Ethereum and The Future," an economic research study analyzing how blockchain technologies and Ethereum's ecosystem could reshape global financial markets through macroeconomic trends

### National Head of VFX (Youth India Foundation)
**Period**: Mar 2021 — Jun 2022
**Role**: Led VFX production and team management for a youth-led NGO with national reach

**Key Achievements**:
- Led a team of 15 VFX artists to produce 20+ motion graphics and promotional videos, reaching 500K+ viewers
- Coordinated cross-functional workflows between design, video, and social media teams
- Trained volunteers in Adobe After Effects, Premiere Pro, and Blender

## Technical Skills

### Programming Languages
- Python
- C/C++
- JavaScript/TypeScript
- Java
- SQL
- Prolog

### Frameworks & Frontend
- React
- Next.js
- FastAPI
- Flask
- Node.js
- Tailwind CSS

### Backend & Systems
- PostgreSQL
- MongoDB
- Redis
- Docker
- Apache Kafka
- WebSockets

### ML & Data
- PyTorch
- Pandas
- NumPy
- Apache Spark
- Scikit-learn
- CRDT (Yjs)

## Notable Projects

### DevSync — Collaborative IDE Platform
**Tech Stack**: Next.js, React, FastAPI, Docker, WebSockets, CRDT (Yjs), LLM Assist

**Description**: Distributed, real-time collaborative IDE with CRDT synchronization and AI-assisted coding

**Key Highlights**:
- Built a distributed, real-time collaborative IDE using CRDT synchronization with sub-50ms latency
- Implemented containerized FastAPI microservices, modular REST endpoints, and persistent environments
- Designed an AI-assisted coding workflow with local inference and version-aware completions

**GitHub**: github.com/AnikethMungara/DevSync

### CiteSight — AI-Powered Academic Research Discovery
**Tech Stack**: Next.js, Gemini API, FastAPI, PyTorch

**Description**: AI research discovery platform with semantic retrieval, document summaries, and contextual Q&A

**Key Highlights**:
- Built an AI research discovery platform with semantic retrieval, document summaries, and contextual Q&A
- Integrated Gemini embeddings and reranking for 90% retrieval accuracy
- Achieved 10 req/s throughput with async FastAPI batching and vector caching

**GitHub**: github.com/sreedharsreeram/SunHacks2025

**Award**: Winner — SunHacks 2025

### Don'tJustWarnMe — Neural Code Correction Engine
**Tech Stack**: Python, PyTorch, JavaScript/TypeScript, FastAPI, VS Code API

**Description**: Local ML-powered code corrector that detects and fixes Python bugs in real time

**Key Highlights**:
- Created a local ML-powered code corrector that detects and fixes Python bugs in real time
- Trained a transformer on 20K bug→fix samples; achieved <150ms inference latency
- Built a VS Code extension + FastAPI backend for offline developer assistance

**GitHub**: github.com/AnikethMungara/DontJustWarnMe

### Mini-SQL Engine — Multithreaded C++ Database
**Tech Stack**: C++, B+ Trees, ThreadPool, OOP

**Description**: Minimal SQL processor with B+ Tree indexing and thread-safe operator pipeline

**Key Highlights**:
- Engineered a minimal SQL processor supporting CREATE, INSERT, SELECT, and in-memory indexing
- Built B+ Tree index for fast lookups and a thread-safe operator pipeline using a custom ThreadPool
- Achieved 2.3× speedup under 100+ concurrent queries

**GitHub**: github.com/AnikethMungara/Mini-Sql-Engine

### Amazon Price Tracker & Hypothesis Testing Tool
**Tech Stack**: Python, BeautifulSoup, Pandas, Matplotlib

**Description**: Automated price analysis tool studying elasticity and FX-driven variance across regions

**Key Highlights**:
- Scraped and analyzed 15+ Amazon US/CA products to study price elasticity and FX-driven variance
- Automated a daily ETL workflow with statistical testing and time-series visualization
- Identified systematic 5–8% price deviations between regions

## Areas of Expertise
- Full Stack Development (Frontend + Backend)
- AI/ML Engineering and Model Development
- Data Engineering and ETL Pipelines
- Real-time Systems and Distributed Computing
- Database Design and Optimization
- System Architecture and Microservices
- DevOps and Containerization
- Research and Data Analysis

## Philosophy
Aniketh believes in creating things that feel intuitive, clean, and meaningful. He's passionate about projects where logic meets design, and where good ideas become reality through code, iteration, and creativity.
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knowledge_base_is_non_empty() {
        assert!(!PORTFOLIO_KNOWLEDGE.trim().is_empty());
    }

    #[test]
    fn test_knowledge_base_covers_core_sections() {
        for heading in [
            "## Education",
            "## Work Experience",
            "## Technical Skills",
            "## Notable Projects",
        ] {
            assert!(
                PORTFOLIO_KNOWLEDGE.contains(heading),
                "knowledge base missing {heading}"
            );
        }
    }
}
