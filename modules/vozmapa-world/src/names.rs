//! First-name bank for synthetic authors and pseudonym suggestions.

pub static FEMALE_NAMES: [&str; 89] = [
    "Maria", "Ana", "Joana", "Sofia", "Isabel", "Rita", "Catarina", "Beatriz", "Inês", "Mariana",
    "Francisca", "Teresa", "Cláudia", "Patrícia", "Sónia", "Paula", "Carla", "Fernanda", "Alice",
    "Helena", "Marta", "Cristina", "Lúcia", "Raquel", "Vânia", "Sandra", "Diana", "Manuela",
    "Andreia", "Bárbara", "Laura", "Filipa", "Mónica", "Carina", "Lurdes", "Rosa", "Clara", "Vera",
    "Margarida", "Elsa", "Célia", "Rute", "Sílvia", "Leonor", "Fátima", "Neuza", "Gisela", "Tânia",
    "Zulmira", "Berta", "Cíntia", "Dália", "Eva", "Graça", "Heloísa", "Iris", "Júlia", "Lara",
    "Madalena", "Natália", "Olívia", "Quitéria", "Sara", "Tatiana", "Ursula", "Wanda", "Xana",
    "Yara", "Amélia", "Aurora", "Bebiana", "Carmo", "Conceição", "Deolinda", "Eduarda", "Estrela",
    "Graça", "Iolanda", "Jacinta", "Luciana", "Matilde", "Nazaré", "Ofélia", "Palmira", "Rafaela",
    "Salomé", "Telma", "Violeta", "Zita",
];
