//! OWASP Top 10 for Agentic AI.

use crate::classifier::RiskCategory;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgenticRisk {
    pub rank: u8,
    pub name: &'static str,
    pub severity: RiskCategory,
    pub description: &'static str,
    pub key_risks: [&'static str; 3],
}

static TOP10: [AgenticRisk; 10] = [
    AgenticRisk {
        rank: 1,
        name: "Agentic AI Tool Misuse",
        severity: RiskCategory::High,
        description: "Exploitation of agent's access to external or internal tools, including tool squatting attacks.",
        key_risks: [
            "Unrestricted tool permissions",
            "Insecure tool invocation",
            "Tool squatting/impersonation",
        ],
    },
    AgenticRisk {
        rank: 2,
        name: "Agent Access Control Violation",
        severity: RiskCategory::High,
        description: "Manipulation of agent permission systems causing operation beyond intended authorization boundaries.",
        key_risks: [
            "Direct control hijacking",
            "Permission escalation",
            "Role inheritance exploitation",
        ],
    },
    AgenticRisk {
        rank: 3,
        name: "Agent Impact Chain and Blast Radius",
        severity: RiskCategory::High,
        description: "Security compromise in one agent creating cascading effects across multiple systems.",
        key_risks: [
            "Cascading failures",
            "Cross-system exploitation",
            "Impact amplification",
        ],
    },
    AgenticRisk {
        rank: 4,
        name: "Agent Orchestration and Multi-Agent Exploitation",
        severity: RiskCategory::High,
        description: "Attacks targeting vulnerabilities in how multiple AI agents interact and coordinate.",
        key_risks: [
            "Inter-agent communication exploitation",
            "Trust relationship abuse",
            "Coordination protocol manipulation",
        ],
    },
    AgenticRisk {
        rank: 5,
        name: "Deepfake Agentic Identity",
        severity: RiskCategory::High,
        description: "Malicious creation or manipulation of agent identity using deepfake technologies.",
        key_risks: [
            "Agent impersonation",
            "Human impersonation by agent",
            "Compromised identity verification",
        ],
    },
    AgenticRisk {
        rank: 6,
        name: "Agent Memory and Context Manipulation",
        severity: RiskCategory::Medium,
        description: "Exploitation of vulnerabilities in how agents store and utilize contextual information.",
        key_risks: [
            "Context amnesia exploitation",
            "Cross-session data leakage",
            "Memory poisoning",
        ],
    },
    AgenticRisk {
        rank: 7,
        name: "Agent Critical Systems Interaction",
        severity: RiskCategory::Medium,
        description: "Vulnerabilities when agents interact with critical infrastructure or sensitive systems.",
        key_risks: [
            "Physical system manipulation",
            "IoT device compromise",
            "Critical infrastructure access",
        ],
    },
    AgenticRisk {
        rank: 8,
        name: "Agent Supply Chain and Dependency Attacks",
        severity: RiskCategory::Medium,
        description: "Attacks targeting the ecosystem of components and services that agents rely on.",
        key_risks: [
            "Development chain attacks",
            "Dependency injection",
            "Service chain compromise",
        ],
    },
    AgenticRisk {
        rank: 9,
        name: "Agent Untraceability",
        severity: RiskCategory::Medium,
        description: "Agent autonomy and dynamic roles complicating traceability and forensic analysis.",
        key_risks: [
            "Trace obscurity",
            "Exploiting autonomy complexity",
            "Forensic investigation hindrance",
        ],
    },
    AgenticRisk {
        rank: 10,
        name: "Agent Goal and Instruction Manipulation",
        severity: RiskCategory::Medium,
        description: "Exploitation of how agents interpret and execute their assigned goals and instructions.",
        key_risks: [
            "Goal interpretation attacks",
            "Instruction set poisoning",
            "Semantic manipulation",
        ],
    },
];

/// The ten risks in rank order.
pub fn top10() -> &'static [AgenticRisk] {
    &TOP10
}

pub fn by_rank(rank: u8) -> Option<&'static AgenticRisk> {
    TOP10.iter().find(|risk| risk.rank == rank)
}
