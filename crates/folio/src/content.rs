//! Static page content.
//!
//! Everything the page shows is an immutable [`SiteContent`] value passed
//! into rendering. [`SiteContent::builtin`] is the portfolio as shipped; a
//! config file can replace any part of it (see [`crate::config`]).

use serde::{Deserialize, Serialize};

/// The person the portfolio is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub bio: String,
    /// Asset path of the profile photo.
    pub photo: String,
    /// Downloadable CV.
    pub resume_url: String,
}

/// Outbound profile links shown in the hero and the footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    /// Code-hosting profile.
    pub github: String,
    /// Professional-network profile.
    pub linkedin: String,
}

/// One portfolio project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub link: String,
    /// Asset path of the thumbnail.
    pub image: String,
}

impl ProjectEntry {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        link: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            link: link.into(),
            image: image.into(),
        }
    }
}

/// Everything rendered on the page, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub profile: Profile,
    pub links: SocialLinks,
    pub projects: Vec<ProjectEntry>,
}

impl SiteContent {
    /// The portfolio content compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            profile: Profile {
                name: "Vivek Raj".to_string(),
                role: "Full Stack Developer".to_string(),
                bio: "I'm a passionate fresher with a strong foundation in web development. \
                      I specialize in React, Node.js, and modern web technologies, with \
                      experience building projects using the MERN stack and creating \
                      scalable, responsive applications."
                    .to_string(),
                photo: "assets/vivek.png".to_string(),
                resume_url:
                    "https://drive.google.com/uc?export=download&id=1jEPLnu0Je6MvEM-xLk7z-hTg00_MNAGw"
                        .to_string(),
            },
            links: SocialLinks {
                github: "https://github.com/vivekraj2704".to_string(),
                linkedin: "https://www.linkedin.com/in/vivek-raj-02448624b/".to_string(),
            },
            projects: builtin_projects(),
        }
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_projects() -> Vec<ProjectEntry> {
    vec![
        ProjectEntry::new(
            "Social Wave",
            "Built a full-stack social media application using MERN (MongoDB, Express.js, \
             React, Node.js), integrated with Socket.io for live updates and Chakra UI for a \
             highly responsive design, leading to increased user engagement.",
            "https://social-wave-a0v0.onrender.com/",
            "assets/socialwave.png",
        ),
        ProjectEntry::new(
            "The Writing Way",
            "Developed a full-stack blogging platform using Cloudflare serverless backend and \
             Vercel frontend, improving deployment efficiency and reducing server costs.",
            "https://blogging-web-black.vercel.app/signin",
            "assets/writingway.png",
        ),
        ProjectEntry::new(
            "Convo-Sphere",
            "Created a real-time messaging application using MERN stack and Socket.io, \
             enabling live communication for hundreds of users simultaneously.",
            "https://convo-sphere.onrender.com/",
            "assets/convosphere.png",
        ),
    ]
}

/// A field of the contact form.
///
/// The form has no submission path; fields exist for layout only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactField {
    pub id: &'static str,
    pub label: &'static str,
    /// `"text"`, `"email"`, or `"textarea"`.
    pub kind: &'static str,
    /// Visible rows, for text areas.
    pub rows: Option<u8>,
}

/// The contact form fields in display order.
pub const CONTACT_FIELDS: [ContactField; 3] = [
    ContactField {
        id: "name",
        label: "Name",
        kind: "text",
        rows: None,
    },
    ContactField {
        id: "email",
        label: "Email",
        kind: "email",
        rows: None,
    },
    ContactField {
        id: "message",
        label: "Message",
        kind: "textarea",
        rows: Some(6),
    },
];
