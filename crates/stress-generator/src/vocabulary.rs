//! Fixed word lists the generator draws from.

/// A template slot and the values it can take.
pub type Slot = (&'static str, &'static [&'static str]);

/// Machine learning terms used for `{method}` and `{method2}` in titles.
pub const ML_TERMS: &[&str] = &[
    "Neural Networks",
    "Deep Learning",
    "Reinforcement Learning",
    "Transfer Learning",
    "Adversarial Training",
    "Meta-Learning",
    "Few-Shot Learning",
    "Self-Supervised",
    "Transformer",
    "Attention Mechanism",
    "Graph Neural Networks",
    "Variational Autoencoders",
    "Generative Models",
    "Contrastive Learning",
    "Federated Learning",
    "Multi-Modal",
    "Computer Vision",
    "Natural Language Processing",
    "Speech Recognition",
    "Recommendation Systems",
    "Time Series",
    "Anomaly Detection",
    "Clustering",
    "Classification",
    "Regression",
    "Optimization",
    "Bayesian Methods",
];

/// Journals and conferences a record can be published in.
pub const VENUES: &[&str] = &[
    "Nature",
    "Science",
    "Cell",
    "The Lancet",
    "NEJM",
    "IEEE TPAMI",
    "JMLR",
    "ICML",
    "NeurIPS",
    "ICLR",
    "AAAI",
    "IJCAI",
    "CVPR",
    "ICCV",
    "ECCV",
    "ACL",
    "EMNLP",
    "NAACL",
    "COLING",
    "SIGIR",
    "WWW",
    "KDD",
    "ICDM",
    "VLDB",
    "SIGMOD",
    "ICDE",
    "CHI",
    "UIST",
    "CSCW",
    "ICRA",
    "IROS",
    "RSS",
    "SIGGRAPH",
    "EUROGRAPHICS",
    "TOG",
    "CACM",
    "IEEE Computer",
    "ACM Computing Surveys",
    "Artificial Intelligence",
    "Expert Systems",
    "Journal of AI Research",
    "Machine Learning",
    "Data Mining and Knowledge Discovery",
];

pub const TITLE_TEMPLATES: &[&str] = &[
    "{method}: {application} for {domain}",
    "{adjective} {method} for {task} in {domain}",
    "{method}-Based {application}: A {adjective} Approach",
    "Towards {adjective} {method} for {task}",
    "{method} and {method2}: {application} in {domain}",
    "A {adjective} Framework for {task} using {method}",
    "{method} for {adjective} {application}",
    "Learning {task} with {method}",
    "{adjective} {method}: Applications to {domain}",
    "On the {adjective} Use of {method} for {task}",
];

pub const TITLE_SLOTS: &[Slot] = &[
    ("method", ML_TERMS),
    ("method2", ML_TERMS),
    (
        "application",
        &[
            "Analysis",
            "Prediction",
            "Classification",
            "Detection",
            "Recognition",
            "Synthesis",
            "Generation",
            "Understanding",
            "Modeling",
            "Optimization",
        ],
    ),
    (
        "domain",
        &[
            "Healthcare",
            "Finance",
            "Autonomous Vehicles",
            "Robotics",
            "Security",
            "Social Media",
            "E-commerce",
            "Climate Science",
            "Biomedical Research",
            "Manufacturing",
            "Energy Systems",
            "Smart Cities",
            "Education",
        ],
    ),
    (
        "task",
        &[
            "Object Detection",
            "Sentiment Analysis",
            "Image Segmentation",
            "Speech Recognition",
            "Fraud Detection",
            "Drug Discovery",
            "Risk Assessment",
            "Pattern Recognition",
            "Anomaly Detection",
            "Resource Allocation",
            "Decision Making",
            "Knowledge Extraction",
        ],
    ),
    (
        "adjective",
        &[
            "Novel",
            "Efficient",
            "Robust",
            "Scalable",
            "Adaptive",
            "Interpretable",
            "Real-time",
            "Distributed",
            "Hierarchical",
            "Multi-scale",
            "End-to-end",
            "Self-supervised",
            "Weakly-supervised",
            "Unsupervised",
            "Semi-supervised",
        ],
    ),
];

pub const ABSTRACT_TEMPLATES: &[&str] = &[
    "This paper presents a novel approach to {problem}. We propose {method} that addresses the limitations of existing techniques. Our experimental results demonstrate significant improvements in {metrics}. The proposed method achieves {performance} across multiple benchmark datasets. These findings have important implications for {applications}.",
    "In this work, we investigate {problem} using {method}. Traditional approaches suffer from {limitation}, which motivates our research. We introduce {innovation} that overcomes these challenges. Extensive experiments on {datasets} validate the effectiveness of our approach. Our method outperforms state-of-the-art baselines by {improvement}.",
    "We address the challenging problem of {problem} in {domain}. Current methods face difficulties with {challenge}, leading to suboptimal performance. Our contribution is {contribution}, which enables {capability}. Through comprehensive evaluation, we show that our approach achieves {results}. This work opens new possibilities for {future_work}.",
    "This study focuses on {problem}, a critical challenge in {field}. We develop {method} that leverages {technique} to improve {aspect}. The key innovation lies in {innovation}, which allows for {benefit}. Experimental validation demonstrates {performance} compared to existing methods. Our findings contribute to the understanding of {domain}.",
    "The proliferation of {domain} has created new challenges in {problem}. We propose {method}, a {adjective} framework that addresses these issues. Our approach combines {technique1} with {technique2} to achieve {goal}. Results on {datasets} show {improvement} over previous work. This research provides a foundation for {applications}.",
];

pub const ABSTRACT_SLOTS: &[Slot] = &[
    (
        "problem",
        &[
            "scalable machine learning",
            "robust pattern recognition",
            "efficient data processing",
            "automated decision making",
            "intelligent systems design",
            "adaptive learning",
            "multi-modal understanding",
            "real-time inference",
            "distributed computation",
        ],
    ),
    (
        "method",
        &[
            "a deep learning framework",
            "an ensemble approach",
            "a reinforcement learning algorithm",
            "a novel neural architecture",
            "a multi-task learning system",
            "a transfer learning method",
        ],
    ),
    (
        "metrics",
        &[
            "accuracy and computational efficiency",
            "precision and recall",
            "F1-score and AUC",
            "runtime performance and memory usage",
            "robustness and generalization",
        ],
    ),
    (
        "performance",
        &[
            "state-of-the-art results",
            "competitive performance",
            "superior accuracy",
            "significant speedup",
            "improved robustness",
        ],
    ),
    (
        "applications",
        &[
            "practical deployment scenarios",
            "industrial applications",
            "real-world systems",
            "future research directions",
            "commercial implementations",
        ],
    ),
    (
        "limitation",
        &[
            "computational complexity",
            "poor generalization",
            "limited scalability",
            "insufficient accuracy",
            "high memory requirements",
        ],
    ),
    (
        "innovation",
        &[
            "an adaptive architecture",
            "a novel training procedure",
            "an efficient optimization algorithm",
            "a regularization technique",
            "a data augmentation strategy",
        ],
    ),
    (
        "datasets",
        &[
            "standard benchmarks",
            "real-world datasets",
            "synthetic and real data",
            "publicly available corpora",
            "domain-specific collections",
        ],
    ),
    (
        "improvement",
        &[
            "15-20%",
            "substantial margins",
            "significant amounts",
            "considerable improvements",
        ],
    ),
    (
        "domain",
        &[
            "computer vision",
            "natural language processing",
            "robotics",
            "healthcare",
            "autonomous systems",
            "financial technology",
            "social media analysis",
        ],
    ),
    (
        "challenge",
        &[
            "data scarcity",
            "computational constraints",
            "model interpretability",
            "distribution shift",
            "adversarial attacks",
            "noisy labels",
        ],
    ),
    (
        "contribution",
        &[
            "a unified framework",
            "a theoretical analysis",
            "an empirical study",
            "a novel algorithm",
            "a comprehensive evaluation",
        ],
    ),
    (
        "capability",
        &[
            "efficient processing",
            "accurate prediction",
            "robust performance",
            "real-time operation",
            "scalable deployment",
        ],
    ),
    (
        "results",
        &[
            "promising results",
            "competitive performance",
            "significant improvements",
            "state-of-the-art accuracy",
            "efficient computation",
        ],
    ),
    (
        "future_work",
        &[
            "advanced applications",
            "theoretical developments",
            "practical implementations",
            "interdisciplinary research",
            "commercial deployment",
        ],
    ),
    (
        "field",
        &[
            "artificial intelligence",
            "machine learning",
            "data science",
            "computer science",
            "information technology",
        ],
    ),
    (
        "technique",
        &[
            "deep neural networks",
            "ensemble methods",
            "probabilistic models",
            "optimization algorithms",
            "statistical learning",
        ],
    ),
    (
        "aspect",
        &[
            "prediction accuracy",
            "computational efficiency",
            "model interpretability",
            "robustness",
            "scalability",
        ],
    ),
    (
        "benefit",
        &[
            "faster convergence",
            "better generalization",
            "reduced complexity",
            "improved accuracy",
            "enhanced robustness",
        ],
    ),
    (
        "adjective",
        &[
            "comprehensive",
            "efficient",
            "robust",
            "scalable",
            "interpretable",
        ],
    ),
    (
        "technique1",
        &[
            "supervised learning",
            "unsupervised learning",
            "reinforcement learning",
            "transfer learning",
            "meta-learning",
        ],
    ),
    (
        "technique2",
        &[
            "attention mechanisms",
            "graph networks",
            "adversarial training",
            "self-supervision",
            "multi-task learning",
        ],
    ),
    (
        "goal",
        &[
            "optimal performance",
            "efficient computation",
            "robust predictions",
            "scalable deployment",
            "interpretable results",
        ],
    ),
];

pub const GIVEN_NAMES: &[&str] = &[
    "Aisha", "Alejandro", "Amelia", "Anders", "Ben", "Carmen", "Chen", "Daniel", "Elena", "Emeka",
    "Fatima", "Felix", "Grace", "Hannah", "Hiroshi", "Ines", "Ivan", "James", "Julia", "Kwame",
    "Laura", "Li", "Marco", "Maria", "Mei", "Michael", "Nadia", "Noah", "Olga", "Omar", "Priya",
    "Rafael", "Rohan", "Sara", "Sofia", "Thomas", "Uma", "Victor", "Wei", "Yusuf", "Zoe",
];

pub const SURNAMES: &[&str] = &[
    "Anderson", "Bauer", "Brown", "Chen", "Costa", "Davis", "Dubois", "Fernandez", "Fischer",
    "Garcia", "Gupta", "Hansen", "Hernandez", "Ito", "Jensen", "Johnson", "Kim", "Kowalski",
    "Kumar", "Lee", "Lopez", "Martin", "Meyer", "Miller", "Moreau", "Nakamura", "Nguyen",
    "Novak", "Okafor", "Patel", "Petrov", "Rossi", "Santos", "Schmidt", "Silva", "Smith",
    "Tanaka", "Taylor", "Wang", "Williams", "Wilson", "Yamamoto", "Zhang",
];
