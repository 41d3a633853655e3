use super::{Language, Protocol, TemplateBundle};

macro_rules! template {
    ($protocol:literal, $language:literal, $role:literal) => {
        include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/templates/",
            $protocol,
            "/",
            $language,
            "/",
            $role,
            ".txt"
        ))
    };
}

const SDK_DOCS: &str = "https://docs.memphis.dev/memphis/sdks/clients";
const REST_DOCS: &str = "https://docs.memphis.dev/memphis/memphis-rest-gateway/api-reference";

pub static CATALOG: [TemplateBundle; 14] = [
    TemplateBundle {
        protocol: Protocol::Sdk,
        language: Language::Go,
        producer: template!("sdk", "go", "producer"),
        consumer: template!("sdk", "go", "consumer"),
        token_generate: None,
        installation: "go get github.com/memphisdev/memphis.go",
        lang_code: "go",
        link: None,
    },
    TemplateBundle {
        protocol: Protocol::Sdk,
        language: Language::NodeJs,
        producer: template!("sdk", "nodejs", "producer"),
        consumer: template!("sdk", "nodejs", "consumer"),
        token_generate: None,
        installation: "npm i memphis-dev --save",
        lang_code: "javascript",
        link: None,
    },
    TemplateBundle {
        protocol: Protocol::Sdk,
        language: Language::TypeScript,
        producer: template!("sdk", "typescript", "producer"),
        consumer: template!("sdk", "typescript", "consumer"),
        token_generate: None,
        installation: "npm i memphis-dev --save",
        lang_code: "typescript",
        link: None,
    },
    TemplateBundle {
        protocol: Protocol::Sdk,
        language: Language::NestJs,
        producer: template!("sdk", "nestjs", "producer"),
        consumer: template!("sdk", "nestjs", "consumer"),
        token_generate: None,
        installation: "npm i memphis-dev --save",
        lang_code: "typescript",
        link: None,
    },
    TemplateBundle {
        protocol: Protocol::Sdk,
        language: Language::Python,
        producer: template!("sdk", "python", "producer"),
        consumer: template!("sdk", "python", "consumer"),
        token_generate: None,
        installation: "pip3 install --upgrade memphis-py",
        lang_code: "python",
        link: None,
    },
    TemplateBundle {
        protocol: Protocol::Sdk,
        language: Language::DotNet,
        producer: template!("sdk", "dotnet", "producer"),
        consumer: template!("sdk", "dotnet", "consumer"),
        token_generate: None,
        installation: "dotnet add package Memphis.Client",
        lang_code: "csharp",
        link: None,
    },
    TemplateBundle {
        protocol: Protocol::Sdk,
        language: Language::Rust,
        producer: "",
        consumer: "",
        token_generate: None,
        installation: "cargo add memphis-rust-community",
        lang_code: "rust",
        link: Some(SDK_DOCS),
    },
    TemplateBundle {
        protocol: Protocol::Rest,
        language: Language::Curl,
        producer: template!("rest", "curl", "producer"),
        consumer: template!("rest", "curl", "consumer"),
        token_generate: Some(template!("rest", "curl", "token_generate")),
        installation: "",
        lang_code: "shell",
        link: None,
    },
    TemplateBundle {
        protocol: Protocol::Rest,
        language: Language::Go,
        producer: template!("rest", "go", "producer"),
        consumer: template!("rest", "go", "consumer"),
        token_generate: Some(template!("rest", "go", "token_generate")),
        installation: "",
        lang_code: "go",
        link: None,
    },
    TemplateBundle {
        protocol: Protocol::Rest,
        language: Language::NodeJs,
        producer: template!("rest", "nodejs", "producer"),
        consumer: template!("rest", "nodejs", "consumer"),
        token_generate: Some(template!("rest", "nodejs", "token_generate")),
        installation: "npm i axios --save",
        lang_code: "javascript",
        link: None,
    },
    TemplateBundle {
        protocol: Protocol::Rest,
        language: Language::Python,
        producer: template!("rest", "python", "producer"),
        consumer: template!("rest", "python", "consumer"),
        token_generate: Some(template!("rest", "python", "token_generate")),
        installation: "pip3 install requests",
        lang_code: "python",
        link: None,
    },
    TemplateBundle {
        protocol: Protocol::Rest,
        language: Language::Java,
        producer: template!("rest", "java", "producer"),
        consumer: template!("rest", "java", "consumer"),
        token_generate: Some(template!("rest", "java", "token_generate")),
        installation: "",
        lang_code: "java",
        link: None,
    },
    TemplateBundle {
        protocol: Protocol::Rest,
        language: Language::JavaScript,
        producer: template!("rest", "javascript", "producer"),
        consumer: template!("rest", "javascript", "consumer"),
        token_generate: Some(template!("rest", "javascript", "token_generate")),
        installation: "",
        lang_code: "javascript",
        link: None,
    },
    TemplateBundle {
        protocol: Protocol::Rest,
        language: Language::DotNet,
        producer: "",
        consumer: "",
        token_generate: None,
        installation: "",
        lang_code: "csharp",
        link: Some(REST_DOCS),
    },
];
