//! The built-in curated catalog.
//!
//! Ids are assigned by hand and must never be reused for a different item:
//! browsers hold them in their selection history across deploys.

use crate::item::{
  ContentItem, Fact, FactCategory, ItemId, NewsArticle, NewsCategory,
};

fn fact(
  id: u32,
  category: FactCategory,
  title: &str,
  description: &str,
  link: &str,
  image_hint: &str,
) -> ContentItem {
  ContentItem::Fact(Fact {
    id: ItemId(id),
    title: title.to_owned(),
    description: description.to_owned(),
    link: Some(link.to_owned()),
    image_hint: image_hint.to_owned(),
    category,
  })
}

fn article(
  id: u32,
  category: NewsCategory,
  title: &str,
  description: &str,
  source_url: &str,
  image_hint: &str,
) -> ContentItem {
  ContentItem::News(NewsArticle {
    id: ItemId(id),
    title: title.to_owned(),
    description: description.to_owned(),
    source_url: source_url.to_owned(),
    image_hint: image_hint.to_owned(),
    category,
  })
}

/// Every fact, in authoring order.
pub fn facts() -> Vec<ContentItem> {
  use FactCategory::*;

  vec![
    // ── Programming languages ─────────────────────────────────────────────
    fact(
      1,
      ProgrammingLanguage,
      "💻 Python Programming Language",
      "Python was created by Guido van Rossum and first released in 1991. \
       Named after the British comedy group Monty Python, it emphasizes code \
       readability and simplicity. Python has become one of the most popular \
       programming languages, especially in data science, AI, and web \
       development.",
      "https://en.wikipedia.org/wiki/Python_(programming_language)",
      "Python programming language logo code",
    ),
    fact(
      2,
      ProgrammingLanguage,
      "☕ Java Programming Language",
      "Java was developed by James Gosling at Sun Microsystems and released in \
       1995. Originally called Oak, it was designed with the principle 'write \
       once, run anywhere'. Java's platform independence through the Java \
       Virtual Machine made it a staple of enterprise and Android development.",
      "https://en.wikipedia.org/wiki/Java_(programming_language)",
      "Java programming language coffee cup logo",
    ),
    fact(
      3,
      ProgrammingLanguage,
      "🌐 JavaScript",
      "JavaScript was created by Brendan Eich in just 10 days in 1995 while \
       working at Netscape. Despite its name, it has no relation to Java. \
       Originally designed to make web pages interactive, it now runs \
       everywhere from browsers to servers with Node.js.",
      "https://en.wikipedia.org/wiki/JavaScript",
      "JavaScript code on computer screen",
    ),
    fact(
      4,
      ProgrammingLanguage,
      "🔧 C Programming Language",
      "C was developed by Dennis Ritchie at Bell Labs between 1969 and 1973. \
       Many languages, including C++, Java and Python, borrow concepts from it. \
       'The C Programming Language' by Kernighan and Ritchie, known as K&R, is \
       often called the bible of C programming.",
      "https://en.wikipedia.org/wiki/C_(programming_language)",
      "C programming language vintage computer terminal",
    ),
    fact(
      5,
      ProgrammingLanguage,
      "🦀 Rust Programming Language",
      "Rust was originally developed by Mozilla Research, with the first stable \
       release in 2015. It offers memory safety without a garbage collector and \
       rules out null pointer dereferences and data races at compile time. The \
       language mascot is Ferris the Crab.",
      "https://en.wikipedia.org/wiki/Rust_(programming_language)",
      "Rust programming language crab mascot",
    ),
    // ── Computer scientists ───────────────────────────────────────────────
    fact(
      6,
      ComputerScientist,
      "🧠 Alan Turing",
      "Alan Turing (1912-1954) is considered the father of computer science and \
       artificial intelligence. He proposed the Turing Test and helped break the \
       Enigma code during WWII. The Turing Award, often called the 'Nobel Prize \
       of Computing', is named in his honor.",
      "https://en.wikipedia.org/wiki/Alan_Turing",
      "Alan Turing portrait with Enigma machine",
    ),
    fact(
      7,
      ComputerScientist,
      "👩‍💻 Ada Lovelace",
      "Ada Lovelace (1815-1852) is often considered the world's first computer \
       programmer. In 1843 she published an algorithm intended for Charles \
       Babbage's Analytical Engine, and envisioned machines that could go beyond \
       calculation to create music and art.",
      "https://en.wikipedia.org/wiki/Ada_Lovelace",
      "Ada Lovelace portrait with mathematical equations",
    ),
    fact(
      8,
      ComputerScientist,
      "🖥️ Steve Jobs",
      "Steve Jobs (1955-2011) co-founded Apple and introduced the Apple II, \
       Macintosh, iPod, iPhone and iPad, each transforming its industry. His \
       Stanford commencement speech ended with 'Stay hungry, stay foolish.'",
      "https://en.wikipedia.org/wiki/Steve_Jobs",
      "Steve Jobs presenting iPhone on stage",
    ),
    fact(
      9,
      ComputerScientist,
      "🌐 Tim Berners-Lee",
      "Tim Berners-Lee invented the World Wide Web in 1989 while working at \
       CERN, writing the first browser, web server and website. He chose not to \
       patent it and later founded the World Wide Web Consortium (W3C).",
      "https://en.wikipedia.org/wiki/Tim_Berners-Lee",
      "Tim Berners-Lee with early web browser",
    ),
    fact(
      10,
      ComputerScientist,
      "🔍 Larry Page & Sergey Brin",
      "Larry Page and Sergey Brin co-founded Google in 1998 while PhD students \
       at Stanford. Their PageRank algorithm ranked pages by the links pointing \
       at them rather than by keyword matching alone.",
      "https://en.wikipedia.org/wiki/PageRank",
      "Google founders Larry Page Sergey Brin early office",
    ),
    // ── AI technology ─────────────────────────────────────────────────────
    fact(
      11,
      AiTechnology,
      "🤖 ChatGPT",
      "ChatGPT was released by OpenAI in November 2022 and reached 100 million \
       users in about two months, making it one of the fastest-growing consumer \
       applications in history. It is built on the GPT family of transformer \
       language models.",
      "https://en.wikipedia.org/wiki/ChatGPT",
      "ChatGPT interface conversation artificial intelligence",
    ),
    fact(
      12,
      AiTechnology,
      "🧠 Neural Networks",
      "Artificial neural networks were first described in 1943 by Warren \
       McCulloch and Walter Pitts. The 2024 Nobel Prize in Physics was awarded \
       to Geoffrey Hinton and John Hopfield for foundational work on neural \
       networks.",
      "https://en.wikipedia.org/wiki/Neural_network_(machine_learning)",
      "Neural network diagram brain connections",
    ),
    fact(
      13,
      AiTechnology,
      "🎯 Machine Learning",
      "The term 'machine learning' was coined by Arthur Samuel in 1959. ML \
       systems learn patterns from data instead of following explicit rules, \
       and power recommendation engines, fraud detection and medical \
       diagnosis.",
      "https://en.wikipedia.org/wiki/Machine_learning",
      "Machine learning algorithms data visualization",
    ),
    fact(
      14,
      AiTechnology,
      "👁️ Computer Vision",
      "Computer vision research began in the 1960s. The ImageNet challenge, \
       started in 2010, supplied the large labelled datasets that let deep \
       learning reach human-level accuracy on many recognition tasks.",
      "https://en.wikipedia.org/wiki/Computer_vision",
      "Computer vision image recognition technology",
    ),
    fact(
      15,
      AiTechnology,
      "🗣️ Natural Language Processing",
      "Natural Language Processing combines linguistics with machine learning. \
       Early systems were rule-based; the Transformer architecture introduced \
       in 2017 led to models such as BERT and GPT.",
      "https://en.wikipedia.org/wiki/Natural_language_processing",
      "Natural language processing text analysis",
    ),
    // ── Software companies ────────────────────────────────────────────────
    fact(
      16,
      SoftwareCompany,
      "🏢 Microsoft Corporation",
      "Microsoft was founded by Bill Gates and Paul Allen in 1975 in \
       Albuquerque, New Mexico. MS-DOS and Windows defined personal computing \
       for decades, and under Satya Nadella the company pivoted to the cloud \
       with Azure.",
      "https://en.wikipedia.org/wiki/Microsoft",
      "Microsoft headquarters campus Redmond Washington",
    ),
    fact(
      17,
      SoftwareCompany,
      "🍎 Apple Inc.",
      "Apple was founded in 1976 by Steve Jobs, Steve Wozniak and Ronald Wayne. \
       After Jobs returned in 1997 the company launched the iMac, iPod, iPhone \
       and iPad and became one of the world's most valuable companies.",
      "https://en.wikipedia.org/wiki/Apple_Inc.",
      "Apple Park headquarters Cupertino California",
    ),
    fact(
      18,
      SoftwareCompany,
      "🔍 Google (Alphabet)",
      "Google started as a search engine in 1998 and expanded into email, \
       Android, cloud computing and AI. Its parent company Alphabet was created \
       in 2015 to organize its businesses.",
      "https://en.wikipedia.org/wiki/Google",
      "Google headquarters Mountain View California colorful",
    ),
    // ── Computing milestones ──────────────────────────────────────────────
    fact(
      19,
      ComputingMilestone,
      "💾 The First Computer Bug",
      "In 1947 operators of the Harvard Mark II found a moth trapped in a relay \
       and taped it into the logbook with the note 'First actual case of bug \
       being found.' Grace Hopper popularized the story and went on to shape \
       COBOL.",
      "https://en.wikipedia.org/wiki/Grace_Hopper",
      "Grace Hopper computer bug moth logbook",
    ),
    fact(
      20,
      ComputingMilestone,
      "🌐 The First Website",
      "The first website, info.cern.ch, went online in 1991. It explained what \
       the World Wide Web was and how to use it, and a restored copy is still \
       online today.",
      "https://en.wikipedia.org/wiki/History_of_the_World_Wide_Web",
      "First website CERN Tim Berners-Lee 1991",
    ),
    fact(
      21,
      ComputingMilestone,
      "📧 The First Email",
      "Ray Tomlinson sent the first networked email in 1971 between two \
       computers sitting side by side. He picked the @ symbol to separate the \
       user from the host, a convention still used today.",
      "https://en.wikipedia.org/wiki/Ray_Tomlinson",
      "Ray Tomlinson first email 1971 computer terminal",
    ),
    fact(
      22,
      ComputingMilestone,
      "🐧 Linux Kernel",
      "Linus Torvalds announced Linux in 1991 as 'just a hobby, won't be big \
       and professional'. It now runs every one of the world's top 500 \
       supercomputers and underpins Android.",
      "https://en.wikipedia.org/wiki/Linux_kernel",
      "Linux penguin Tux mascot server room",
    ),
    fact(
      23,
      ComputingMilestone,
      "🌿 Git Version Control",
      "Torvalds wrote Git in 2005 after the Linux project lost access to \
       BitKeeper. The first version was self-hosting within days, and Git is \
       now the dominant version control system.",
      "https://en.wikipedia.org/wiki/Git",
      "Git branching diagram commit graph",
    ),
    fact(
      24,
      ComputingMilestone,
      "📟 UNIX",
      "Ken Thompson and Dennis Ritchie created UNIX at Bell Labs starting in \
       1969. Its philosophy of small tools that do one thing well lives on in \
       Linux, macOS and the BSDs.",
      "https://en.wikipedia.org/wiki/Unix",
      "UNIX terminal PDP-11 Bell Labs",
    ),
    fact(
      25,
      ComputingMilestone,
      "⚙️ ENIAC",
      "ENIAC, completed in 1945, was the first programmable general-purpose \
       electronic computer. It used about 18,000 vacuum tubes and was \
       programmed by a team of six women by rewiring plugboards.",
      "https://en.wikipedia.org/wiki/ENIAC",
      "ENIAC vacuum tube computer programmers",
    ),
    fact(
      26,
      ComputingMilestone,
      "📈 Moore's Law",
      "In 1965 Gordon Moore observed that the number of transistors on a chip \
       was doubling roughly every year, later revised to every two years. The \
       prediction guided the semiconductor industry for half a century.",
      "https://en.wikipedia.org/wiki/Moore%27s_law",
      "Transistor count chart silicon chip",
    ),
  ]
}

/// Every news article, in authoring order.
pub fn news() -> Vec<ContentItem> {
  use NewsCategory::*;

  vec![
    // ── Technology ────────────────────────────────────────────────────────
    article(
      1,
      Technology,
      "🚀 OpenAI Releases GPT-4 Turbo with Vision",
      "OpenAI has announced GPT-4 Turbo, featuring improved performance, lower \
       costs, and the ability to process images alongside text. The model \
       offers a 128K context window.",
      "https://openai.com/blog/gpt-4-turbo",
      "AI model multimodal vision text",
    ),
    article(
      2,
      Technology,
      "🤖 DeepSeek Releases Open-Source AI Models",
      "DeepSeek has released a series of open-weight AI models that compete \
       with proprietary systems on coding, mathematics and reasoning tasks.",
      "https://github.com/deepseek-ai",
      "Open source AI model release",
    ),
    article(
      3,
      Technology,
      "⚡ Python 3.12 Introduces New Features",
      "Python 3.12 brings performance improvements, better error messages, \
       more flexible f-strings and improved type hints.",
      "https://docs.python.org/3.12/whatsnew/3.12.html",
      "Python release code editor",
    ),
    article(
      4,
      Technology,
      "🔧 JavaScript ES2024 Features Released",
      "The ECMAScript 2024 specification adds new array methods such as \
       toSorted(), improved regular expressions and better async handling.",
      "https://tc39.es/ecma262/",
      "JavaScript specification code",
    ),
    article(
      5,
      Technology,
      "🌟 GitHub Copilot Gets Major Updates",
      "GitHub Copilot now offers better context awareness across larger \
       codebases and supports more programming languages.",
      "https://github.blog/changelog/label/copilot/",
      "AI pair programmer code completion",
    ),
    // ── Policy ────────────────────────────────────────────────────────────
    article(
      6,
      Policy,
      "🏛️ H1B Visa Processing Delays Impact Tech Hiring",
      "Delays in H1B visa processing are affecting tech hiring plans, pushing \
       companies to rethink international hiring and remote arrangements.",
      "https://www.uscis.gov/working-in-the-united-states/temporary-workers/h-1b-specialty-occupations",
      "Visa documents government building",
    ),
    article(
      7,
      Policy,
      "💼 Remote Work Tax Laws Create Compliance Challenges",
      "Multi-state tax rules are creating compliance work for IT professionals \
       who work remotely, and employers are updating payroll systems.",
      "https://www.irs.gov/newsroom/faqs-for-individuals-working-remotely",
      "Remote worker laptop tax forms",
    ),
    article(
      8,
      Policy,
      "⚖️ EU AI Act Implementation Affects Global Tech Companies",
      "The European Union's AI Act imposes strict requirements on high-risk AI \
       applications and transparency obligations on providers worldwide.",
      "https://digital-strategy.ec.europa.eu/en/policies/regulatory-framework-ai",
      "European Union flag artificial intelligence",
    ),
    article(
      9,
      Policy,
      "🔒 Cybersecurity Regulations Tighten for Financial Tech",
      "New cybersecurity rules for fintech companies require stronger security \
       controls and faster incident reporting.",
      "https://www.cisa.gov/cybersecurity",
      "Cybersecurity lock financial data",
    ),
    article(
      10,
      Policy,
      "🌐 Data Privacy Laws Expand Globally",
      "GDPR-style privacy laws are spreading worldwide, and IT teams are \
       updating data handling procedures and consent mechanisms.",
      "https://gdpr.eu/what-is-gdpr/",
      "Data privacy shield globe",
    ),
    article(
      11,
      Policy,
      "📋 New I-94 Digital Requirements for Tech Professionals",
      "Updated I-94 digital entry requirements change how international tech \
       workers track and verify their legal status online.",
      "https://i94.cbp.dhs.gov/",
      "Airport immigration digital form",
    ),
    article(
      12,
      Policy,
      "🏢 Corporate Tax Changes Impact Tech Startups",
      "Changes to R&D deductions and startup expense treatment are affecting \
       the finances of software companies and tech startups.",
      "https://www.irs.gov/businesses/small-businesses-self-employed/business-taxes",
      "Startup office tax documents",
    ),
  ]
}
