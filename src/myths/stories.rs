//! The story content table.
//!
//! Everything page rendering needs is static data here: titles, gradient
//! anchors, the opening quote, the narrative paragraphs, the classical
//! citations and the AI metaphor grid. Stories are listed in timeline
//! order; the footer navigation chain follows this order.

/// A classical citation: quoted passage plus the book it is from.
pub struct Ancient {
    pub text: &'static str,
    pub source: &'static str,
}

/// One card in the AI metaphor grid.
pub struct AiItem {
    pub title: &'static str,
    pub body: &'static str,
}

/// Full content of one myth page.
pub struct Story {
    pub slug: &'static str,
    pub title: &'static str,
    /// Uppercase latin name shown in the hero block.
    pub en_upper: &'static str,
    /// Mixed-case latin name used in the timeline meta label.
    pub en_name: &'static str,
    /// Timeline era label.
    pub era: &'static str,
    /// One-line timeline description.
    pub summary: &'static str,
    /// Two gradient anchor colors for the title.
    pub gradient: (&'static str, &'static str),
    pub quote: &'static str,
    pub quote_source: &'static str,
    pub text: &'static [&'static str],
    pub ancient: &'static [Ancient],
    pub ai_items: &'static [AiItem],
}

pub static STORIES: &[Story] = &[
    Story {
        slug: "pangu",
        title: "盘古开天地",
        en_upper: "PANGU",
        en_name: "Pangu",
        era: "创世之始",
        summary: "混沌如鸡子，盘古生其中。一斧劈开天地，身化万物。",
        gradient: ("#e0e0e0", "#9e9e9e"),
        quote: "天地浑沌如鸡子，盘古生其中。",
        quote_source: "三五历纪",
        text: &[
            "在时间尚未开始的地方，没有天，没有地，没有光，也没有影。宇宙是一团混沌，像一枚巨大的鸡卵，内外不分，清浊不辨。",
            "盘古就孕育在这枚卵中。他在黑暗里沉睡了一万八千年，身体随着混沌一同生长。",
            "某一刻，他醒了。睁开眼，四周是无边的黑暗与沉闷。他挥动巨斧，朝着混沌奋力一劈。",
            "一声巨响之后，轻而清的东西缓缓上升，成为天；重而浊的东西慢慢下沉，成为地。天地自此分开。",
            "盘古怕天地重新合拢，便头顶天，脚踏地，站在天地之间。天每日升高一丈，地每日加厚一丈，盘古也每日长高一丈。",
            "又过了一万八千年，天升得极高，地变得极厚，盘古的身躯也长到了九万里。天地终于稳固，再不会闭合。",
            "盘古耗尽了力气，缓缓倒下。他呼出的气息变成风和云，声音化作雷霆，左眼成为太阳，右眼成为月亮。",
            "他的四肢五体化为四极五岳，血液成为江河，筋脉成为道路，肌肉成为田土，发须变作星辰。盘古以自己的身体，成全了一个完整的世界。",
        ],
        ancient: &[
            Ancient {
                text: "天地浑沌如鸡子，盘古生其中。万八千岁，天地开辟，阳清为天，阴浊为地。",
                source: "三五历纪",
            },
            Ancient {
                text: "首生盘古，垂死化身。气成风云，声为雷霆，左眼为日，右眼为月。",
                source: "五运历年记",
            },
        ],
        ai_items: &[
            AiItem {
                title: "混沌与初始化",
                body: "训练开始前的模型如同混沌：参数随机，没有结构。初始化的那一斧，决定了之后一切秩序的展开。",
            },
            AiItem {
                title: "开天辟地与特征分离",
                body: "清浊分开正如表示学习把纠缠的信号分解成可用的特征维度，轻清上浮，重浊下沉。",
            },
            AiItem {
                title: "顶天立地与训练稳定",
                body: "盘古撑住天地一万八千年，像训练中的正则化与梯度裁剪，防止刚分开的结构重新坍缩。",
            },
            AiItem {
                title: "身化万物与模型蒸馏",
                body: "盘古倒下后身体化为山川日月。一个大模型的知识同样可以蒸馏进无数的小模型与下游任务。",
            },
            AiItem {
                title: "一万八千年与算力",
                body: "创世不是一瞬间的奇迹，而是漫长的积累。每一代模型的能力，都来自按部就班的海量计算。",
            },
            AiItem {
                title: "牺牲与开源",
                body: "盘古把自己全部给了世界。基础模型的开放权重，让整个生态在它的身体上生长。",
            },
        ],
    },
    Story {
        slug: "nvwa",
        title: "女娲造人",
        en_upper: "NVWA",
        en_name: "Nvwa",
        era: "造人之初",
        summary: "抟黄土作人，引绳成众。女娲以双手赋予泥土灵魂。",
        gradient: ("#ff9a9e", "#fecfef"),
        quote: "女娲抟黄土作人，剧务，力不暇供，乃引绳于泥中，举以为人。",
        quote_source: "风俗通义",
        text: &[
            "盘古开辟天地之后，大地上有了山川草木，有了鸟兽虫鱼，却始终冷清。行走在原野上的女娲，感到一种说不出的孤独。",
            "她在一处池水边坐下，看见自己的倒影在水面晃动。她忽然想：为什么不照着自己的样子，造出一些会说话、会思考的小东西呢？",
            "女娲从池边掘起黄土，掺了水，照着倒影捏出第一个小人。她把小人放到地上，那泥人竟然活了，睁开眼睛，喊她母亲。",
            "女娲大喜，不停地捏。捏出的人有男有女，绕着她又唱又跳，然后散向四方。大地第一次有了人声。",
            "可是大地太辽阔了。女娲捏了一天又一天，双手酸痛，进度却远远不够。",
            "她想出一个办法：折下一根藤条，伸进泥潭搅动，再猛地向大地一挥。溅落的泥点，落地便成了人。",
            "自此造人的速度快了千百倍。泥点洒向哪里，哪里就有了炊烟与村落。",
            "后来人们传说，亲手捏出的人富贵，藤条甩出的人贫贱。但在女娲眼里，每一个都是她的孩子。",
            "为了让人类延续下去，女娲又建立了婚姻，让男女结合，自己生育后代，不必再依赖泥土。",
            "人类从此生生不息。女娲静静看着大地上的灯火，知道这个世界终于完整了。",
        ],
        ancient: &[
            Ancient {
                text: "俗说天地开辟，未有人民，女娲抟黄土作人。剧务，力不暇供，乃引绳于泥中，举以为人。",
                source: "风俗通义",
            },
            Ancient {
                text: "娲，古之神圣女，化万物者也。",
                source: "说文解字",
            },
        ],
        ai_items: &[
            AiItem {
                title: "抟土造人与样本标注",
                body: "亲手捏出的第一批小人，是精心标注的种子数据：数量少，质量高，奠定了整个群体的模样。",
            },
            AiItem {
                title: "引绳成众与数据增强",
                body: "藤条一挥溅出千万泥点，如同数据增强与合成数据，用规模换覆盖，让分布铺满大地。",
            },
            AiItem {
                title: "照影造人与自监督",
                body: "女娲照着自己的倒影造人。模型也是从人类自身的语言与行为中学习，成为我们的镜像。",
            },
            AiItem {
                title: "泥与魂的鸿沟",
                body: "同样的黄土，为何有的成了人？从参数到智能的那一步，至今仍是深渊上的一跃。",
            },
            AiItem {
                title: "婚姻制度与自举",
                body: "让人类自己繁衍，就是让系统自举：好的生成结果反哺训练，群体不再依赖最初的那双手。",
            },
            AiItem {
                title: "富贵与贫贱的偏差",
                body: "捏的与甩的，起点便不同。数据来源的差异会固化为模型里的偏差，需要被看见与修正。",
            },
        ],
    },
    Story {
        slug: "youchao",
        title: "有巢构木",
        en_upper: "YOUCHAO",
        en_name: "Youchao",
        era: "构木为巢",
        summary: "构木为巢，以避群害。人类第一次有了自己的居所。",
        gradient: ("#81c784", "#c8e6c9"),
        quote: "构木为巢，以避群害。",
        quote_source: "韩非子",
        text: &[
            "上古之时，人民少而禽兽众。人们露宿荒野，夜里要提防虎豹，雨季要忍受泥泞，伤病与恐惧如影随形。",
            "有一位圣人观察树上的鸟巢：风吹不落，雨打不进，猛兽够不着。他想，人为什么不能像鸟一样住到树上去？",
            "他砍下枝条，在大树的枝杈间架设平台，再用藤蔓捆扎，铺上茅草，造出了第一个供人居住的巢。",
            "人们争相仿效。一座座树上的巢屋在林间出现，夜里再也不必轮流守望，老人与孩子终于能安睡。",
            "人们感念他的功绩，推举他为王，称他为有巢氏。",
            "巢居不只是躲避，更是人类第一次把世界改造成适合自己的样子。从这一夜的安眠开始，文明有了扎根之处。",
        ],
        ancient: &[Ancient {
            text: "上古之世，人民少而禽兽众，人民不胜禽兽虫蛇。有圣人作，构木为巢以避群害，而民悦之，使王天下，号之曰有巢氏。",
            source: "韩非子",
        }],
        ai_items: &[
            AiItem {
                title: "构木为巢与系统架构",
                body: "把散落的枝条组织成可栖身的结构，正是架构设计：同样的材料，组织方式决定安全与否。",
            },
            AiItem {
                title: "避群害与安全边界",
                body: "巢的意义是把危险隔离在外。沙箱、权限与对齐护栏，是智能系统的树上之巢。",
            },
            AiItem {
                title: "仿鸟筑巢与迁移学习",
                body: "有巢氏没有凭空发明，而是从鸟巢迁移了现成的方案。跨领域借用结构，是最高效的创新。",
            },
            AiItem {
                title: "民悦之与用户采纳",
                body: "巢屋不需要强制推广，住过一夜的人自然留下。好的基础设施靠体验自证。",
            },
            AiItem {
                title: "安睡与可靠性",
                body: "文明始于不再彻夜戒备。当人们敢把重要的事托付给系统，才说明它真正可靠。",
            },
        ],
    },
    Story {
        slug: "suiren",
        title: "燧人取火",
        en_upper: "SUIREN",
        en_name: "Suiren",
        era: "钻木取火",
        summary: "钻燧取火，以化腥臊。火种从此掌握在人类手中。",
        gradient: ("#ff8a65", "#ffcc80"),
        quote: "钻燧取火，以化腥臊。",
        quote_source: "韩非子",
        text: &[
            "远古的人们吃生冷的果实与腥臊的生肉，肠胃受损，疾病缠身。他们见过雷电点燃的野火，却只能远远敬畏，火熄了便重新回到黑暗。",
            "在遥远的燧明国，有一种燧木。一位智者看见啄木的鸟用喙敲击树干，竟迸出火星。",
            "他折下燧木的枝条，钻木相摩。手掌磨破了，木屑冒烟了，终于，一缕火苗跳了起来。",
            "这是人类自己生出的第一团火。不必等待雷电，不必祈求上天，火种从此握在人的手中。",
            "他把取火的方法教给所有人。人们用火烤熟食物，驱赶寒冷与野兽，黑夜第一次被照亮。",
            "人们尊他为燧人氏。从这团火开始，人类不再只是适应自然，而是开始驾驭自然的力量。",
        ],
        ancient: &[Ancient {
            text: "有圣人作，钻燧取火，以化腥臊，而民说之，使王天下，号之曰燧人氏。",
            source: "韩非子",
        }],
        ai_items: &[
            AiItem {
                title: "野火与再现性",
                body: "雷电之火不可控、不可再现；钻木之火随取随用。从偶然的灵感到可复现的方法，才算掌握了技术。",
            },
            AiItem {
                title: "钻木见星与梯度下降",
                body: "千万次看似无效的摩擦，每一次都在积累温度，直到越过燃点。训练正是如此迭代逼近。",
            },
            AiItem {
                title: "火种与预训练模型",
                body: "取一次火，便可以点亮无数火把。一个预训练模型，被下游任务取用成千上万次。",
            },
            AiItem {
                title: "以化腥臊与数据清洗",
                body: "火把生肉化为熟食，如同清洗与对齐把原始语料变成可消化的训练数据。",
            },
            AiItem {
                title: "观鸟啄木与灵感来源",
                body: "方法藏在自然的细节里。注意力机制、退火算法，都是从别处观察来的火星。",
            },
        ],
    },
    Story {
        slug: "fuxi",
        title: "伏羲画卦",
        en_upper: "FUXI",
        en_name: "Fuxi",
        era: "始作八卦",
        summary: "仰观天文，俯察地理，始作八卦，以通神明之德。",
        gradient: ("#7c8cf8", "#b3c0ff"),
        quote: "仰则观象于天，俯则观法于地，始作八卦。",
        quote_source: "周易·系辞",
        text: &[
            "伏羲氏统领天下的时候，人们已有巢可居，有火可用，却仍然无法理解世界：日月为何运转，四季为何更替，祸福为何降临。",
            "伏羲决心读懂天地。他仰头观察日月星辰的运行，低头查看山川大地的纹理，观察鸟兽的花纹与大地的习性。",
            "传说黄河中浮出龙马，背负河图。伏羲把万千现象反复归纳，终于悟出：天地万物的变化，都出于阴与阳两种力量的消长。",
            "他用一条长线代表阳，两条短线代表阴，三画成卦，推演出乾、坤、震、巽、坎、离、艮、兑八卦，象征天、地、雷、风、水、火、山、泽。",
            "八卦两两相叠，又生出六十四卦，穷尽了事物变化的种种情状。复杂的世界，第一次被装进了一套简洁的符号。",
            "从此人们用八卦记事占问、推演吉凶。伏羲画下的不只是卦象，而是人类第一套抽象的符号系统。",
        ],
        ancient: &[Ancient {
            text: "古者包牺氏之王天下也，仰则观象于天，俯则观法于地，于是始作八卦，以通神明之德，以类万物之情。",
            source: "周易·系辞",
        }],
        ai_items: &[
            AiItem {
                title: "阴阳两爻与二进制",
                body: "一阴一阳两个基本符号，组合表达万物，与比特的零和一同构。伏羲画下了最早的编码。",
            },
            AiItem {
                title: "观象画卦与特征抽取",
                body: "从星辰鸟兽的万千表象中归纳出八个卦象，正是从高维数据中抽取低维表示。",
            },
            AiItem {
                title: "八卦相荡与组合泛化",
                body: "八卦相叠生六十四卦，有限的基元通过组合覆盖无限的情境，这是语言与模型共同的力量。",
            },
            AiItem {
                title: "占卜推演与预测模型",
                body: "卦象的本质是用过去的模式推演未来的走向，与时序预测的目标一脉相承。",
            },
            AiItem {
                title: "河图洛书与结构化数据",
                body: "传说中的河图是带着结构浮现的数字方阵。好的表示，往往自带让人一眼看穿的排列。",
            },
        ],
    },
    Story {
        slug: "shennong",
        title: "神农尝百草",
        en_upper: "SHENNONG",
        en_name: "Shennong",
        era: "尝草辨药",
        summary: "尝百草之滋味，一日而遇七十毒。以身试药，开医药之源。",
        gradient: ("#a5d6a7", "#66bb6a"),
        quote: "神农尝百草之滋味，水泉之甘苦，一日而遇七十毒。",
        quote_source: "淮南子",
        text: &[
            "上古的人们采食野生的果实草木，分不清什么可以果腹，什么暗藏剧毒。误食而死的人不计其数。",
            "神农氏看在眼里，痛在心里。他做出一个决定：由他亲口去尝遍天下的草木，替所有人探明每一种植物的性味。",
            "他背起药篓走遍山野，逢草必尝，逢泉必饮。传说他的腹部晶莹透明，五脏可见，草药入腹，是良是毒一目了然。",
            "有的草让他呕吐眩晕，有的让他浑身麻痹。最凶险的一天，他中毒七十次，全凭一口茶叶解毒活了下来。",
            "就这样日复一日，神农辨明了数百种草木：哪些可以充饥，哪些可以入药，哪些碰不得。他把这些知识一一传授给百姓。",
            "后人把他尝出的药性整理成书，尊他为医药与农耕之祖。以一人之身试尽天下之毒，换来的是万世的药方。",
        ],
        ancient: &[Ancient {
            text: "神农乃始教民播种五谷，尝百草之滋味，水泉之甘苦，令民知所避就。当此之时，一日而遇七十毒。",
            source: "淮南子",
        }],
        ai_items: &[
            AiItem {
                title: "尝百草与穷举评测",
                body: "逐一亲尝每种草木，是最朴素也最彻底的评测：不靠猜测，只认实验结果。",
            },
            AiItem {
                title: "七十毒与对抗样本",
                body: "一天中毒七十次仍继续，红队测试正是主动吞下毒样本，把失效模式暴露在上线之前。",
            },
            AiItem {
                title: "透明腹与可解释性",
                body: "神农的五脏清晰可见，药效毒性一望而知。可解释的模型，让每次输入的作用路径无所遁形。",
            },
            AiItem {
                title: "茶叶解毒与回滚机制",
                body: "再谨慎的试验也需要解药。检查点与回滚，是系统中毒时的那一口茶。",
            },
            AiItem {
                title: "传授百姓与知识沉淀",
                body: "个体的试错若不沉淀为共享的药典，牺牲便会被重复。评测基准就是领域的本草经。",
            },
        ],
    },
    Story {
        slug: "xuanyuan",
        title: "轩辕黄帝",
        en_upper: "XUANYUAN",
        en_name: "Xuanyuan",
        era: "人文初祖",
        summary: "修德振兵，治五气，抚万民，度四方。华夏文明的奠基者。",
        gradient: ("#ffd54f", "#ffecb3"),
        quote: "轩辕乃修德振兵，治五气，艺五种，抚万民，度四方。",
        quote_source: "史记",
        text: &[
            "神农氏的时代走到末期，诸侯相互侵伐，暴虐百姓，天下纷乱无主。",
            "轩辕在这乱世中崛起。他修养德行，整顿兵马，研习四时五行之气，种植五谷，安抚万民，丈量四方的土地。",
            "他先在阪泉之野与炎帝三战，将其降服；又在涿鹿擒杀作乱的蚩尤。诸侯于是尊轩辕为天子，是为黄帝。",
            "黄帝的时代是发明的时代：造舟车以便交通，制衣冠以别礼仪，仓颉造字，嫘祖养蚕，岐伯论医，容成制历。",
            "他设置左右大监，监察万国，任用风后、力牧等贤臣治理天下，开创了最早的官制。",
            "华夏的文明框架在他手中奠定。后世子孙自称炎黄子孙，把他尊为人文初祖。",
        ],
        ancient: &[Ancient {
            text: "轩辕之时，神农氏世衰。诸侯相侵伐，暴虐百姓，而神农氏弗能征。于是轩辕乃习用干戈，以征不享，诸侯咸来宾从。",
            source: "史记",
        }],
        ai_items: &[
            AiItem {
                title: "修德振兵与软硬兼施",
                body: "先修德后振兵，能力与对齐并重。只有强大没有约束的系统，与蚩尤无异。",
            },
            AiItem {
                title: "百业并举与平台生态",
                body: "舟车、文字、历法、医学在同一时代涌现。基础平台一旦稳固，应用便成批生长。",
            },
            AiItem {
                title: "左右大监与监控体系",
                body: "设官监察万国，如同生产系统的指标、日志与告警，让辽阔的疆域时刻可观测。",
            },
            AiItem {
                title: "任用贤臣与模块分工",
                body: "风后主谋略，力牧主兵事。复杂系统的治理之道，在于把专职能力编排成一个整体。",
            },
            AiItem {
                title: "度四方与建立基准",
                body: "丈量四方土地，是为天下建立统一的坐标系。标准与基准，是协作的前提。",
            },
        ],
    },
    Story {
        slug: "qinchiyou",
        title: "黄帝擒蚩尤",
        en_upper: "QINCHIYOU",
        en_name: "Qinchiyou",
        era: "涿鹿之战",
        summary: "涿鹿大战，迷雾指南，擒杀蚩尤，天下始定。",
        gradient: ("#ef5350", "#ffab91"),
        quote: "黄帝乃征师诸侯，与蚩尤战于涿鹿之野，遂禽杀蚩尤。",
        quote_source: "史记",
        text: &[
            "蚩尤是九黎之君，有兄弟八十一人，铜头铁额，以沙石为食，善造五兵，暴虐天下而无人能制。",
            "蚩尤驱逐炎帝，炎帝求救于黄帝。黄帝征集诸侯之师，驱熊罴貔貅为前驱，与蚩尤会战于涿鹿之野。",
            "蚩尤作大雾三日三夜，军士迷失方向。黄帝命风后制造指南车，车上木人手指南方，大军循指而出，破雾而进。",
            "蚩尤又请风伯雨师纵大风雨。黄帝请下天女魃止住风雨，战场重归于晴。",
            "黄帝命常先制作夔皮大鼓，九通鼓声震动五百里，士气大振，蚩尤的军队阵脚大乱。",
            "涿鹿之野最终决出胜负，蚩尤被擒杀。诸侯尊黄帝为天子，绵延的战乱就此平息，天下始定。",
        ],
        ancient: &[Ancient {
            text: "蚩尤作乱，不用帝命。于是黄帝乃征师诸侯，与蚩尤战于涿鹿之野，遂禽杀蚩尤。",
            source: "史记",
        }],
        ai_items: &[
            AiItem {
                title: "大雾与信息战",
                body: "蚩尤的雾是对感知系统的干扰攻击。对抗环境下，感知层的鲁棒性决定生死。",
            },
            AiItem {
                title: "指南车与惯性基准",
                body: "不依赖外部信号、始终指向既定方向的木人，是在干扰中保持内部一致性的导航系统。",
            },
            AiItem {
                title: "联军与模型集成",
                body: "黄帝不是单打独斗，而是征师诸侯、各展所长。集成多个弱者，胜过单个强者。",
            },
            AiItem {
                title: "风雨与环境扰动",
                body: "风伯雨师改变的是战场本身。分布漂移来临时，系统需要像请来女魃那样的应对手段。",
            },
            AiItem {
                title: "鼓声与同步信号",
                body: "九通鼓把千军万马协调成一个节拍。分布式系统的心跳与广播，正是战场上的鼓。",
            },
        ],
    },
    Story {
        slug: "fenghou",
        title: "风后指南",
        en_upper: "FENGHOU",
        en_name: "Fenghou",
        era: "指南定向",
        summary: "作指南车以别四方，迷雾之中为大军指路。",
        gradient: ("#4dd0e1", "#b2ebf2"),
        quote: "黄帝与蚩尤战于涿鹿之野，蚩尤作大雾弥三日，军人皆惑。",
        quote_source: "太平御览",
        text: &[
            "风后是黄帝最重要的谋臣。传说黄帝梦见大风吹走天下的尘垢，醒来叹道：风为号令，执政者也。于是依梦访贤，在海隅找到了风后。",
            "涿鹿之战中，蚩尤作起弥天大雾，三日三夜不散。黄帝的军士辨不清东西南北，在雾中自相冲撞，军心惶惶。",
            "危急之际，风后受命造车。他在车上立起一个木人，借机括之巧，使木人的手臂无论车子如何转向，始终指向南方。",
            "这便是指南车。大军以木人所指为准，队列重新集结，循着恒定的方向冲出了大雾。",
            "雾散之后，战局逆转，蚩尤终被擒杀。一件辨明方向的器械，胜过了千军万马。",
            "风后后来位列三公之首，助黄帝制定攻守之法。而指南车的传说，成为后世一切导航之术的源头。",
        ],
        ancient: &[Ancient {
            text: "黄帝与蚩尤战于涿鹿之野，蚩尤作大雾弥三日，军人皆惑。黄帝乃令风后法斗机作指南车，以别四方，遂擒蚩尤。",
            source: "太平御览",
        }],
        ai_items: &[
            AiItem {
                title: "恒定指向与目标函数",
                body: "无论车身怎样转向，木人始终指南。优化过程中的目标函数，就是系统的那只手臂。",
            },
            AiItem {
                title: "机括之巧与差速结构",
                body: "指南车靠纯机械的内部结构抵消外部旋转，不依赖任何外部信号，是最早的航位推算。",
            },
            AiItem {
                title: "迷雾行军与缺失数据",
                body: "感知全部失效时，系统只能依靠内部状态外推。良好的内部表示是雾中唯一的依凭。",
            },
            AiItem {
                title: "依梦访贤与人才检索",
                body: "黄帝从一个梦的线索里定位到风后，如同从微弱的信号中检索出关键的那一条记录。",
            },
            AiItem {
                title: "一器胜千军与杠杆点",
                body: "扭转战局的不是更多兵力，而是一件小小的器械。找到系统的杠杆点，收益远超堆砌资源。",
            },
        ],
    },
    Story {
        slug: "xuannv",
        title: "玄女赐书",
        en_upper: "XUANNV",
        en_name: "Xuannv",
        era: "天书兵法",
        summary: "九天玄女授黄帝兵信神符，战法自此有章可循。",
        gradient: ("#b39ddb", "#d1c4e9"),
        quote: "黄帝攻蚩尤，三年城不下。玄女授帝以兵符。",
        quote_source: "太平御览",
        text: &[
            "与蚩尤的战争旷日持久。传说黄帝攻而不克，三年不下，屡战屡挫，于是斋戒祈于泰山之下。",
            "忽有昏雾四起，一位人首鸟形的女神自天而降。她便是九天玄女，奉天命前来授助黄帝。",
            "黄帝再拜伏地，不敢起身。玄女说：吾以天书授汝，战法攻守，皆有其道。",
            "她授予黄帝兵信神符与奇门遁甲之术：何时当攻，何时当守，如何布阵，如何用间，条分缕析，皆成章法。",
            "黄帝依法演练，军势大变。此前的蛮力相搏，化作有章可循的谋略之战。",
            "得玄女之书后，黄帝终于在涿鹿决战中擒杀蚩尤。后世兵家溯源，都把这部天书视为兵法之祖。",
        ],
        ancient: &[Ancient {
            text: "黄帝攻蚩尤，三年城不下。玄女教帝三宫秘略、五音权谋之本，遂克蚩尤。",
            source: "太平御览",
        }],
        ai_items: &[
            AiItem {
                title: "天书与算法手册",
                body: "三年蛮攻不下，一卷章法破局。把经验整理成算法与模式，是从力量到智能的跃迁。",
            },
            AiItem {
                title: "奇门遁甲与策略搜索",
                body: "攻守进退的组合推演，本质是在博弈树中搜索制胜路径，天书给出的是剪枝的法则。",
            },
            AiItem {
                title: "斋戒祈山与问题求解",
                body: "黄帝先承认打不赢，再去求更高的方法。识别能力边界并主动求助，是智能体的关键能力。",
            },
            AiItem {
                title: "授书不授胜与授人以渔",
                body: "玄女给的是方法而非胜利本身。好的知识传递交付的是可泛化的规则，不是单次的答案。",
            },
            AiItem {
                title: "兵法之祖与基础理论",
                body: "一部源头之书衍生出百家兵法，正如少数奠基性论文支撑起整个领域的大厦。",
            },
        ],
    },
    Story {
        slug: "changxian",
        title: "常先制鼓",
        en_upper: "CHANGXIAN",
        en_name: "Changxian",
        era: "制鼓振军",
        summary: "以夔皮冒鼓，声闻五百里，九通之后军威大振。",
        gradient: ("#ffb74d", "#ffe0b2"),
        quote: "东海中有流波山，其上有兽，状如牛，苍身而无角，其名曰夔。",
        quote_source: "山海经",
        text: &[
            "东海之中有座流波山，山上有一种怪兽，形状像牛，苍色的身子却没有角，只有一只脚。它出入水中必有风雨相随，吼声如雷，名叫夔。",
            "涿鹿之战前，黄帝军中号令不一：大军绵延数十里，前军已接敌，后军还不知晓。传令的旗帜在大雾和混战中形同虚设。",
            "大臣常先受命解决号令之难。他想：要让五百里内的将士同时听见一个声音，只有造一面前所未有的大鼓。",
            "黄帝使人取夔皮冒鼓。常先又取雷兽之骨为鼓槌。鼓成之日，一击而声震五百里。",
            "决战之时，九通鼓响，连山岳都在震动。黄帝的军队闻鼓而进，万人如一；蚩尤的部众闻声丧胆，阵势崩乱。",
            "一面鼓统一了千军的步调。从此军阵有了共同的节拍，号令之声可以传到目力不及的远方。",
        ],
        ancient: &[Ancient {
            text: "其名曰夔。黄帝得之，以其皮为鼓，橛以雷兽之骨，声闻五百里，以威天下。",
            source: "山海经",
        }],
        ai_items: &[
            AiItem {
                title: "鼓声与广播机制",
                body: "一声鼓传遍五百里，所有节点同时收到同一条消息。可靠的广播是协同的底座。",
            },
            AiItem {
                title: "九通鼓与同步屏障",
                body: "鼓点划定统一的节拍，万人同步进退，如同分布式训练里对齐各节点的同步屏障。",
            },
            AiItem {
                title: "夔皮雷骨与硬件选型",
                body: "要传五百里，寻常的鼓面不行。突破性的系统能力，常常始于一次材料与硬件的升级。",
            },
            AiItem {
                title: "号令不一与脑裂",
                body: "前军接敌后军不知，正是系统的脑裂状态。常先修复的是指挥系统的一致性。",
            },
            AiItem {
                title: "闻鼓丧胆与信号品质",
                body: "同一声鼓，己方听出节奏，敌方听出恐惧。信息的价值取决于接收方能否解码。",
            },
        ],
    },
    Story {
        slug: "hanba",
        title: "旱神女魃",
        en_upper: "HANBA",
        en_name: "Hanba",
        era: "天女止雨",
        summary: "天女下凡止住暴雨，助黄帝破敌，自身却再不能归天。",
        gradient: ("#e57373", "#ffcdd2"),
        quote: "有人衣青衣，名曰黄帝女魃。",
        quote_source: "山海经",
        text: &[
            "涿鹿之战进入最危急的时刻。蚩尤请来风伯和雨师，狂风暴雨倾泻在黄帝军阵之上，指南车陷入泥泞，鼓声被雨幕吞没。",
            "黄帝抬头望天，请下了自己的女儿——居于系昆之山、常穿青衣的天女魃。",
            "魃的身体里蕴藏着极致的炎热与干旱。她走入战场，所到之处，暴雨止息，积水蒸腾，风伯雨师的法力土崩瓦解。",
            "战场恢复了晴朗。黄帝的军队重整旗鼓，一举击溃蚩尤，取得了涿鹿之战的最终胜利。",
            "然而神力耗尽的魃，再也没有力气回到天上。她留在人间，所居之处不再降雨，人们由敬转怨，称她为旱魃，驱逐她到赤水之北。",
            "她为胜利付出了永远的代价。田祖叫她北行，人们祈雨时先除水道、决通沟渎。这个帮助父亲赢得天下的天女，成了神话里最孤独的名字。",
        ],
        ancient: &[Ancient {
            text: "蚩尤请风伯雨师，纵大风雨。黄帝乃下天女曰魃，雨止，遂杀蚩尤。魃不得复上，所居不雨。",
            source: "山海经",
        }],
        ai_items: &[
            AiItem {
                title: "止雨与异常抑制",
                body: "魃的能力是抵消环境的极端扰动。稳定系统总要有一个能把风暴压下去的组件。",
            },
            AiItem {
                title: "不得复上与技术债",
                body: "为一场胜利调用的非常手段，战后留在系统里成为持续的代价。应急方案最易固化为债务。",
            },
            AiItem {
                title: "所居不雨与副作用",
                body: "强力干预从不只影响目标本身。部署任何强组件前，都要先丈量它的影响半径。",
            },
            AiItem {
                title: "由敬转怨与舆论漂移",
                body: "同一个魃，战时是救星，旱时是灾星。对系统的评价随环境漂移，需要被持续校准。",
            },
            AiItem {
                title: "先除水道与预案管理",
                body: "人们学会了祈雨前先通沟渠。与强力系统共存的办法，是提前准备好疏导的通道。",
            },
        ],
    },
    Story {
        slug: "xingtian",
        title: "刑天断首",
        en_upper: "XINGTIAN",
        en_name: "Xingtian",
        era: "不屈之志",
        summary: "断首犹舞干戚，以乳为目，以脐为口。猛志固常在。",
        gradient: ("#90a4ae", "#cfd8dc"),
        quote: "刑天与帝至此争神，帝断其首，葬之常羊之山。",
        quote_source: "山海经",
        text: &[
            "刑天本是炎帝的臣属，擅作乐曲。炎帝败于黄帝之后，部众皆降，唯有刑天不服，提着斧与盾独自北上，要与天帝争夺神位。",
            "他一路杀上天庭门前，与黄帝展开激战。两人从天上战到人间，刀光斧影搅动风云。",
            "激战中，黄帝挥剑斩落了刑天的头颅，将其埋葬在常羊之山下。胜负似乎已定。",
            "可是那具无头的身躯并没有倒下。它在山间站立起来，以双乳为眼，以肚脐为口，左手持盾，右手挥斧，继续向着天空挥舞。",
            "没有了头颅，便用身体去看、去呼喊。刑天以这样的姿态，永远地战斗在常羊山下。",
            "千年之后，诗人陶渊明写下：刑天舞干戚，猛志固常在。失败者的不屈，成了比胜利更长久的传说。",
        ],
        ancient: &[Ancient {
            text: "刑天与帝至此争神。帝断其首，葬之常羊之山。乃以乳为目，以脐为口，操干戚以舞。",
            source: "山海经",
        }],
        ai_items: &[
            AiItem {
                title: "断首犹战与容错降级",
                body: "失去头颅就用身体代偿。健壮的系统在核心组件失效后，仍能以降级模式继续服务。",
            },
            AiItem {
                title: "以乳为目与感知重建",
                body: "用别的器官重建视觉与发声，是功能在新载体上的重映射，如同模型在缺失模态下的补偿。",
            },
            AiItem {
                title: "猛志常在与目标持久化",
                body: "身体可以被摧毁，目标不随载体消失。把意图持久化在结构里，系统才有真正的韧性。",
            },
            AiItem {
                title: "常羊之山与故障现场",
                body: "刑天永远战斗在他倒下的地方。完整保留的故障现场，是复盘与重建最宝贵的资料。",
            },
            AiItem {
                title: "败者之歌与负样本",
                body: "神话不只记录胜利者。失败的轨迹同样被千年传颂，正如负样本与失败案例塑造了学习。",
            },
        ],
    },
];
