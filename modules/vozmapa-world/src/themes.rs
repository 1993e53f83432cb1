//! The thematic vocabulary of the testimonial map.
//!
//! Every story carries exactly one [`Theme`]. On the wire a theme is its
//! Portuguese display label (the string the map UI renders on pins and
//! filter chips), so any serialized record is tagged with a member of the
//! fixed label set by construction.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// --- Themes ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Theme {
    #[serde(rename = "Perda de Peso")]
    WeightLoss,
    #[serde(rename = "Longevidade")]
    Longevity,
    #[serde(rename = "Menopausa")]
    Menopause,
    #[serde(rename = "Energia e Memória")]
    EnergyAndMemory,
    #[serde(rename = "Cabelo, Pele e Unhas")]
    HairSkinNails,
    #[serde(rename = "Circulação e Açúcar no Sangue")]
    CirculationAndBloodSugar,
    #[serde(rename = "Saúde Sexual")]
    SexualHealth,
    #[serde(rename = "Problemas Digestivos")]
    DigestiveIssues,
    #[serde(rename = "Ossos e Articulações")]
    BonesAndJoints,
    #[serde(rename = "Sono")]
    Sleep,
    #[serde(rename = "Ansiedade e Humor")]
    AnxietyAndMood,
    #[serde(rename = "Saúde Mental")]
    MentalHealth,
    #[serde(rename = "Auto-estima")]
    SelfEsteem,
    #[serde(rename = "Quotidiano")]
    DailyLife,
}

impl Theme {
    /// Every theme, in display order.
    pub const ALL: [Theme; 14] = [
        Theme::WeightLoss,
        Theme::Longevity,
        Theme::Menopause,
        Theme::EnergyAndMemory,
        Theme::HairSkinNails,
        Theme::CirculationAndBloodSugar,
        Theme::SexualHealth,
        Theme::DigestiveIssues,
        Theme::BonesAndJoints,
        Theme::Sleep,
        Theme::AnxietyAndMood,
        Theme::MentalHealth,
        Theme::SelfEsteem,
        Theme::DailyLife,
    ];

    /// Portuguese display label, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Theme::WeightLoss => "Perda de Peso",
            Theme::Longevity => "Longevidade",
            Theme::Menopause => "Menopausa",
            Theme::EnergyAndMemory => "Energia e Memória",
            Theme::HairSkinNails => "Cabelo, Pele e Unhas",
            Theme::CirculationAndBloodSugar => "Circulação e Açúcar no Sangue",
            Theme::SexualHealth => "Saúde Sexual",
            Theme::DigestiveIssues => "Problemas Digestivos",
            Theme::BonesAndJoints => "Ossos e Articulações",
            Theme::Sleep => "Sono",
            Theme::AnxietyAndMood => "Ansiedade e Humor",
            Theme::MentalHealth => "Saúde Mental",
            Theme::SelfEsteem => "Auto-estima",
            Theme::DailyLife => "Quotidiano",
        }
    }

    /// Glyph reference the UI maps onto its icon set.
    pub fn icon(&self) -> Icon {
        match self {
            Theme::WeightLoss => Icon::Scale,
            Theme::Longevity => Icon::Activity,
            Theme::Menopause => Icon::Flame,
            Theme::EnergyAndMemory => Icon::Zap,
            Theme::HairSkinNails => Icon::Sparkles,
            Theme::CirculationAndBloodSugar => Icon::Droplets,
            Theme::SexualHealth => Icon::Heart,
            Theme::DigestiveIssues => Icon::Utensils,
            Theme::BonesAndJoints => Icon::Bone,
            Theme::Sleep => Icon::Moon,
            Theme::AnxietyAndMood => Icon::Wind,
            Theme::MentalHealth => Icon::Brain,
            Theme::SelfEsteem => Icon::Smile,
            Theme::DailyLife => Icon::Coffee,
        }
    }

    /// Story template pool for this theme. Pools vary in size; the daily-life
    /// pool is the largest because it seasons the health themes across the map.
    pub fn templates(&self) -> &'static [&'static str] {
        match self {
            Theme::WeightLoss => WEIGHT_LOSS,
            Theme::Longevity => LONGEVITY,
            Theme::Menopause => MENOPAUSE,
            Theme::EnergyAndMemory => ENERGY_AND_MEMORY,
            Theme::HairSkinNails => HAIR_SKIN_NAILS,
            Theme::CirculationAndBloodSugar => CIRCULATION_AND_BLOOD_SUGAR,
            Theme::SexualHealth => SEXUAL_HEALTH,
            Theme::DigestiveIssues => DIGESTIVE_ISSUES,
            Theme::BonesAndJoints => BONES_AND_JOINTS,
            Theme::Sleep => SLEEP,
            Theme::AnxietyAndMood => ANXIETY_AND_MOOD,
            Theme::MentalHealth => MENTAL_HEALTH,
            Theme::SelfEsteem => SELF_ESTEEM,
            Theme::DailyLife => DAILY_LIFE,
        }
    }

    /// Resolve a display label back to its theme. Exact match only.
    pub fn from_label(label: &str) -> Option<Theme> {
        Theme::ALL.into_iter().find(|t| t.label() == label)
    }

    pub fn is_daily_life(&self) -> bool {
        matches!(self, Theme::DailyLife)
    }

    /// The health-focused themes, i.e. everything except [`Theme::DailyLife`].
    pub fn health_themes() -> impl Iterator<Item = Theme> {
        Theme::ALL.into_iter().filter(|t| !t.is_daily_life())
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// --- Icons ---

/// Glyph references for theme pins. The UI owns the actual artwork; records
/// only carry the name of the glyph they want.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Scale,
    Activity,
    Flame,
    Zap,
    Sparkles,
    Droplets,
    Heart,
    Utensils,
    Bone,
    Moon,
    Wind,
    Brain,
    Smile,
    Coffee,
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Icon::Scale => write!(f, "scale"),
            Icon::Activity => write!(f, "activity"),
            Icon::Flame => write!(f, "flame"),
            Icon::Zap => write!(f, "zap"),
            Icon::Sparkles => write!(f, "sparkles"),
            Icon::Droplets => write!(f, "droplets"),
            Icon::Heart => write!(f, "heart"),
            Icon::Utensils => write!(f, "utensils"),
            Icon::Bone => write!(f, "bone"),
            Icon::Moon => write!(f, "moon"),
            Icon::Wind => write!(f, "wind"),
            Icon::Brain => write!(f, "brain"),
            Icon::Smile => write!(f, "smile"),
            Icon::Coffee => write!(f, "coffee"),
        }
    }
}

// --- Template pools ---

const WEIGHT_LOSS: &[&str] = &[
    "Faço tudo direitinho e a balança nem se mexe. É desmotivante ver o corpo mudar e não conseguir fazer nada.",
    "Já não sei o que comer. Sinto-me inchada o dia todo, como se não coubesse na minha própria roupa.",
    "Desde que fiz 40 anos que tudo mudou. Parece que o meu metabolismo simplesmente adormeceu.",
    "Gostava de me sentir bem no meu corpo outra vez. Não é por vaidade, é para me sentir eu.",
    "O inchaço não passa, mesmo a beber água e a ter cuidado. Sinto-me pesada.",
    "Tenho picos de fome que não consigo controlar, principalmente à noite. Fico frustrada comigo.",
    "Durante anos pesei o mesmo, mas agora, com a pré-menopausa, ganho peso só de olhar para a comida.",
    "A gordura abdominal apareceu do nada. Nunca tive barriga e agora sinto-me desconfortável com calças de ganga.",
    "Estou cansada de dietas ioiô. Perco dois quilos, ganho três. O meu corpo parece estar a lutar contra mim.",
    "Sinto-me retida, pesada. Os meus anéis já não entram nos dedos em dias de muito calor.",
    "Não é sobre ser magra, é sobre não me sentir inflamada constantemente.",
    "Sinto que o meu corpo já não responde ao exercício como antes. Corro, mas o peso não mexe.",
    "Tenho vergonha de comer em público porque sinto que as pessoas julgam o meu peso.",
    "A roupa de verão aterroriza-me. Sinto falta da confiança que tinha aos trinta anos.",
];

const LONGEVITY: &[&str] = &[
    "Só quero ter energia para brincar com os meus netos sem ficar de rastos. O tempo passa demasiado depressa.",
    "Assusta-me pensar no futuro e não ter saúde para aproveitar. Quero envelhecer bem, só isso.",
    "Sinto que envelheci dez anos no último ano. Queria travar um bocadinho o tempo.",
    "Não quero depender de ninguém mais tarde. Quero manter a minha força e a minha cabeça.",
    "Sinto falta da vitalidade que tinha. Ainda tenho tanta coisa que quero fazer.",
    "Quero proteger-me e ter saúde. A vida é curta e eu quero aproveitá-la bem.",
    "A minha mãe teve osteoporose e eu tenho pavor de seguir o mesmo caminho. Quero prevenir.",
    "Vejo as minhas rugas e aceito-as, mas queria que o meu corpo acompanhasse a minha mente jovem.",
    "Sinto-me enferrujada pela manhã. Quero manter a mobilidade para viajar quando me reformar.",
    "A saúde cardiovascular preocupa-me. Quero estar cá para ver os meus filhos casarem.",
    "Tenho 60 anos, mas sinto-me com 40 na cabeça. O corpo é que às vezes não colabora.",
    "Quero envelhecer com dignidade e autonomia. É o meu maior objetivo.",
];

const MENOPAUSE: &[&str] = &[
    "O calor sobe-me pelo corpo e fico logo encharcada, é horrível. Sinto-me desconfortável na minha própria pele.",
    "Choro por tudo e por nada, parece que deixei de mandar nas minhas emoções. Ninguém nos avisa que ia ser assim.",
    "Durmo mal e acordo encharcada em suor. Passo o dia cansada e irritável.",
    "Sinto-me uma estranha no meu próprio corpo. Nada funciona como dantes.",
    "A secura incomoda-me imenso no dia a dia. É algo de que ninguém fala, mas que afeta muito.",
    "Ganhei barriga e não mudei nada na alimentação. Custa-me ver o corpo a mudar assim.",
    "Os afrontamentos apanham-me em reuniões de trabalho. Fico vermelha e envergonhada.",
    "A minha líbido desapareceu com a menopausa. Sinto-me menos mulher e isso dói.",
    "Sinto uma névoa mental terrível. Esqueço-me de palavras a meio das frases.",
    "O meu cabelo ficou fino e quebradiço desde que a menstruação parou.",
    "As dores nas articulações vieram com a menopausa. Ninguém me disse que isto fazia parte.",
    "Sinto-me invisível. Parece que a sociedade nos descarta quando entramos nesta fase.",
    "É um luto pela juventude, mas também uma libertação. Estou a tentar ver o lado positivo.",
];

const ENERGY_AND_MEMORY: &[&str] = &[
    "A minha cabeça está sempre nevoada, esqueço-me das coisas mais simples. Fico triste por não ter a genica de antes.",
    "Chego ao fim do dia sem pinga de energia para a minha família. Só me apetece cair no sofá e dormir.",
    "Acordo já cansada, parece que não descansei nada. O dia é uma luta constante.",
    "Falta-me a clareza mental que tinha. Sinto-me lenta a pensar e a reagir.",
    "Preciso de café para funcionar, senão não aguento. Queria ter energia natural outra vez.",
    "Esqueço-me de nomes, de recados... sinto-me mal com isso. Parece que não estou presente.",
    "Depois de almoço, o meu cérebro desliga. Luto para manter os olhos abertos no trabalho.",
    "Antigamente fazia diretas e recuperava. Agora, uma noite mal dormida estraga-me a semana toda.",
    "Sinto-me em 'modo de poupança de bateria' constante. Faço o mínimo indispensável.",
    "Tenho dificuldade em concentrar-me em tarefas longas. A minha mente divaga.",
    "Sinto saudades de ter energia para sair à noite e divertir-me. Agora só quero pijama.",
    "A fadiga mental é pior que a física. Sinto a cabeça pesada.",
];

const HAIR_SKIN_NAILS: &[&str] = &[
    "O meu cabelo cai tanto que tenho medo de o pentear. Olho para as fotos antigas e nem acredito na diferença.",
    "A minha pele perdeu o brilho, parece que estou sempre com ar cansado. Sinto falta de me sentir bonita.",
    "As minhas unhas partem-se por tudo e por nada. Sinto-me descuidada e não gosto.",
    "O cabelo está fraco e sem vida. Já tentei de tudo e nada parece resultar.",
    "Olho-me ao espelho e vejo rugas que apareceram de repente. Custa aceitar a idade a chegar.",
    "A minha pele está seca e nada a hidrata. Sinto-me desconfortável.",
    "O aparecimento de manchas no rosto está a afetar a minha auto-estima.",
    "Sinto o cabelo a ficar mais fino no topo da cabeça. Uso lenços para disfarçar.",
    "As minhas unhas têm estrias e partem na carne. É doloroso e feio.",
    "Sinto a pele flácida no pescoço. Evito decotes por causa disso.",
    "Queria um brilho natural, sem ter de usar maquilhagem para esconder o cansaço.",
];

const CIRCULATION_AND_BLOOD_SUGAR: &[&str] = &[
    "Ao fim do dia tenho as pernas tão pesadas que doem. Só me apetece pôr os pés para cima e não fazer mais nada.",
    "Tenho sempre as mãos e os pés gelados. É uma sensação desagradável que não passa.",
    "Sinto formigueiros nas pernas quando estou muito tempo sentada. Preocupa-me.",
    "Tenho quebras de energia súbitas e fico a tremer de fome. Preciso de estabilidade.",
    "O inchaço nos tornozelos é muito chato, principalmente no calor. Sinto-me pesada.",
    "Tenho historial de diabetes na família e quero cuidar-me. Tenho receio do futuro.",
    "Fico tonta se me levanto depressa demais. A minha tensão anda aos altos e baixos.",
    "Sinto picadas nos dedos dos pés à noite. Tenho medo que seja má circulação.",
    "As varizes começaram a aparecer e doem. Não gosto de mostrar as pernas.",
    "Tenho desejos incontroláveis de doces à tarde. Sei que é o açúcar a falar.",
];

const SEXUAL_HEALTH: &[&str] = &[
    "A vontade desapareceu e sinto-me culpada por isso. Gosto do meu marido, mas o meu corpo simplesmente não responde.",
    "Sinto-me seca e desconfortável, o que acaba com qualquer momento de intimidade. Sinto que perdi uma parte de mim.",
    "As infeções urinárias são constantes e desgastantes. Afetam muito a minha qualidade de vida.",
    "Sinto falta de me sentir mulher, de ter desejo. Parece que essa parte de mim adormeceu.",
    "Queria ter a energia de outros tempos na intimidade. Sinto-me diferente e distante.",
    "As hormonas deram cabo da minha vida íntima. É frustrante querer e não conseguir.",
    "Tenho dor durante a relação. Evito o momento e arranjo desculpas, o que afasta o meu parceiro.",
    "Nunca pensei que a menopausa fosse afetar tanto a minha vida sexual. Sinto-me 'fechada'.",
    "A candidíase recorrente deixa-me exausta e desconfortável.",
    "Sinto que perdi a conexão com o meu próprio prazer. Quero redescobri-lo.",
];

const DIGESTIVE_ISSUES: &[&str] = &[
    "Fico inchada mal acabo de comer. Parece que tenho um balão na barriga.",
    "A minha digestão é muito lenta e pesada. Sinto-me mal disposta muitas vezes.",
    "Tenho muita azia e isso tira-me o prazer de comer. Tenho medo que me faça mal.",
    "O meu intestino funciona quando quer. Sinto-me presa e desconfortável.",
    "Certas comidas deixam-me logo de rastos. Queria comer sem medo.",
    "Sinto um desconforto constante na barriga. É cansativo viver assim.",
    "Parece que fico grávida de 6 meses depois de jantar. O inchaço é real.",
    "Tenho gases dolorosos que me deixam constrangida socialmente.",
    "Já cortei glúten, lactose... e continuo a sentir-me mal. É frustrante.",
    "Sinto-me enfartada mesmo comendo pouco. A digestão parou no tempo.",
];

const BONES_AND_JOINTS: &[&str] = &[
    "Acordo toda presa, preciso de tempo para começar a mexer-me. Dantes saltava da cama.",
    "Os joelhos doem-me a subir as escadas. Sinto-me limitada nos movimentos.",
    "Tenho medo de cair e partir alguma coisa. Sinto os ossos mais frágeis.",
    "Oiço estalidos quando me mexo. Sinto que o meu corpo está a ficar 'perro'.",
    "As costas doem-me quase todos os dias. Queria sentir-me leve outra vez.",
    "Sinto-me menos flexível. Custa-me apanhar coisas do chão ou apertar os sapatos.",
    "A minha mãe partiu a anca e eu tenho pavor que me aconteça o mesmo.",
    "Sinto dores nas mãos quando está frio. Artrite na família assusta-me.",
    "Fazer ginástica tornou-se doloroso, mas sei que preciso de me mexer.",
    "Sinto o corpo rígido, como se precisasse de óleo nas juntas.",
];

const SLEEP: &[&str] = &[
    "Deito-me exausta mas o sono não vem. É desesperante ver as horas a passar e saber que vou estar de rastos amanhã.",
    "Acordo a meio da noite e a cabeça começa logo a mil. Não consigo desligar.",
    "O meu sono é muito leve, acordo com qualquer barulho. Nunca descanso a sério.",
    "Acordo às 5 da manhã e já não durmo mais. O dia torna-se interminável.",
    "Sinto-me um zombie durante o dia. Só queria dormir uma noite seguida.",
    "A ansiedade não me deixa descansar. O corpo está cansado mas a mente não pára.",
    "Tenho suores noturnos que me obrigam a mudar de pijama. O sono fica estragado.",
    "O meu marido ressona, mas o meu sono tornou-se tão leve que já não consigo ignorar.",
    "Tomo chás, melatonina... nada funciona. O meu relógio biológico avariou.",
    "Sinto que envelheço mais depressa porque não descanso o suficiente.",
];

const ANXIETY_AND_MOOD: &[&str] = &[
    "Sinto um aperto no peito que não me larga o dia todo. Ando sempre nervosa e nem sei bem porquê.",
    "Tenho o pavio curto, irrito-me com coisas mínimas. Não gosto de ser assim para os meus filhos.",
    "O stress dá cabo de mim. Sinto-me sempre no limite das minhas forças.",
    "Não consigo relaxar, estou sempre a pensar no que tenho para fazer. É exaustivo.",
    "Sinto uma pressão constante. Às vezes só me apetece fugir e ter silêncio.",
    "Preocupo-me com tudo e com todos. A minha cabeça não me dá descanso.",
];

const MENTAL_HEALTH: &[&str] = &[
    "Sinto-me esgotada mentalmente, o burnout tirou-me a alegria de viver.",
    "A depressão é silenciosa, mas pesa toneladas. Às vezes só queria que alguém entendesse.",
    "Faço terapia há anos, mas há dias em que o mundo parece cinzento demais.",
    "Sinto um nevoeiro mental constante que não me deixa concentrar em nada.",
    "O meu bem-estar psicológico foi deixado para trás enquanto cuidava de todos os outros.",
    "Tenho ataques de pânico repentinos. É assustador perder o controlo assim.",
];

const SELF_ESTEEM: &[&str] = &[
    "Olho-me ao espelho e não reconheço a mulher que vejo. A confiança desapareceu.",
    "Sinto-me invisível. Parece que a idade me tirou o brilho e a importância.",
    "Tenho vergonha do meu corpo na praia. Comparo-me demasiado com as outras.",
    "Duvido constantemente do meu valor e das minhas capacidades.",
    "Queria voltar a gostar de mim, a sentir-me bonita e capaz.",
    "As mudanças no meu corpo afetaram muito a forma como me vejo enquanto mulher.",
];

const DAILY_LIFE: &[&str] = &[
    "Depois dos 50, descobri que gosto de pintar. Nunca é tarde para começar algo novo e sujar as mãos de tinta.",
    "A casa ficou vazia quando o meu mais novo foi para a universidade. Chorei uma semana, mas hoje redescobri o prazer do silêncio.",
    "Decidi deixar de pintar o cabelo. Assumir os brancos foi a maior libertação que senti nos últimos anos. Sou eu, sem filtros.",
    "Comecei a correr aos 45. No início não aguentava 2 minutos, hoje corri os meus primeiros 5km. Sinto-me poderosa.",
    "O meu casamento de 20 anos terminou. Tive muito medo da solidão, mas estou a aprender a ser a minha melhor amiga.",
    "Reuni a coragem para mudar de área profissional. Voltar a estudar com colegas de 20 anos foi assustador, mas rejuvenesceu-me.",
    "Cuidar da minha mãe com Alzheimer é a coisa mais difícil que já fiz. Há dias em que me sinto exausta, mas o sorriso dela vale tudo.",
    "Fiz as pazes com o espelho. Durante anos só via defeitos, hoje vejo as marcas de uma vida bem vivida.",
    "Retomei o piano que tinha abandonado há 30 anos. Os dedos estão enferrujados, mas a alma canta.",
    "Aprendi finalmente a impor limites no trabalho. A minha saúde mental agradece e, curiosamente, respeitam-me mais.",
    "Percebi que não tenho de ser a 'super mulher' para todos. Às vezes, 'bom o suficiente' é perfeito.",
    "Aos domingos, desligo o telemóvel e vou caminhar para a serra. É o meu momento sagrado de recarregar baterias.",
    "Ser avó trouxe-me uma alegria que não esperava. É um amor leve, sem o peso da responsabilidade de educar.",
    "Consegui finalmente juntar dinheiro para a viagem de sonho que adiei durante anos. Vou sozinha e estou radiante.",
    "Tenho dias em que só me apetece chorar, e aprendi que não faz mal. Não temos de ser fortes o tempo todo, somos humanas.",
    "O reencontro com as amigas do liceu lembrou-me quem eu era antes das responsabilidades. Rimos até doer a barriga.",
    "Aprendi a dizer 'não' sem sentir culpa. Foi a conquista mais difícil e mais importante deste ano.",
    "Mudei de cidade e comecei do zero aos 55 anos. Assustador? Sim. Mas nunca me senti tão livre.",
    "Redescobri o prazer de dançar na sala. Ninguém está a ver e a música cura qualquer dia mau.",
    "Escrevi um diário pela primeira vez. É estranho ler os meus pensamentos, mas ajuda-me a organizar a cabeça.",
    "Deixei de tentar agradar a toda a gente. Agora, a minha prioridade é estar em paz comigo mesma.",
];
