// src/core/samples.rs
use clap::ValueEnum;

/// Built-in articles for trying the summarizer without any input at hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Sample {
    Technology,
    Education,
}

impl Sample {
    pub const ALL: [Self; 2] = [Self::Technology, Self::Education];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Technology => "Technology article",
            Self::Education => "Education article",
        }
    }

    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::Technology => TECHNOLOGY,
            Self::Education => EDUCATION,
        }
    }
}

const TECHNOLOGY: &str = "\
Artificial intelligence has developed remarkably quickly over the last few decades. \
The technology has reshaped many parts of everyday life, from the way people communicate \
and work to the way they approach complex problems. Machine learning, a branch of AI, lets \
computers learn from data without being explicitly programmed for every individual task.

In healthcare, AI helps doctors diagnose illness with high accuracy. Systems can read medical \
images such as CT and MRI scans with impressive speed and precision. In transportation, \
self-driving cars backed by AI are being trialled in many countries, promising safer and more \
efficient travel.

The progress of AI also raises ethical and social challenges. Concerns about machines replacing \
human jobs, about data privacy, and about bias in algorithms are important issues that still \
need answers. AI should therefore be developed with its ethics and its impact on society in mind.
";

const EDUCATION: &str = "\
Education is changing significantly in the digital era. The COVID-19 pandemic accelerated the \
adoption of technology in schools and forced institutions to adapt to online learning. E-learning \
platforms and virtual classrooms became the main way to keep teaching going while physical \
gatherings were restricted.

Learning management systems, video conferencing and interactive learning apps are now an integral \
part of modern education. Teachers and students have had to learn a range of digital tools to keep \
lessons effective.

Although online learning offers more flexibility and accessibility, it also brings new challenges. \
The digital divide between students with and without access to technology, and the loss of the \
face-to-face interaction that matters for social development, are issues that need attention when \
digital education is put into practice.
";
